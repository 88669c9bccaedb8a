use uuid::Uuid;
use web_sys::Storage;

const USER_ID_KEY: &str = "user_id";
const REFERRAL_COUNT_KEY: &str = "referral_count";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn save_id(id: &str) {
    let Some(storage) = local_storage() else {
        tracing::warn!("no local storage, user_id won't persist");
        return;
    };

    match storage.set_item(USER_ID_KEY, id) {
        Ok(()) => tracing::info!("storing user_id in local storage"),
        Err(err) => tracing::warn!("failed to store user_id: {:?}", err),
    }
}

/// The stored user id, or a freshly generated one that gets stored.
pub fn load_user_id() -> String {
    let stored = local_storage().and_then(|storage| storage.get_item(USER_ID_KEY).ok().flatten());

    match stored {
        Some(id) => id,
        None => {
            let id = Uuid::new_v4().to_string();
            save_id(&id);
            id
        }
    }
}

/// Written by whatever syncs with the referral backend; this app only reads it.
pub fn load_referral_count() -> u32 {
    let stored =
        local_storage().and_then(|storage| storage.get_item(REFERRAL_COUNT_KEY).ok().flatten());
    parse_count(stored.as_deref())
}

fn parse_count(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

pub fn current_location() -> String {
    web_sys::window()
        .and_then(|window| window.location().href().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_parsing() {
        assert_eq!(parse_count(Some("3")), 3);
        assert_eq!(parse_count(Some(" 4\n")), 4);
        assert_eq!(parse_count(Some("-1")), 0);
        assert_eq!(parse_count(Some("lots")), 0);
        assert_eq!(parse_count(None), 0);
    }
}
