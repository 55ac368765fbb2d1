//! Unit tests for the Identifiers module

use core_kernel::{AccountId, RateCardId};
use uuid::Uuid;

mod rate_card_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        let id1 = RateCardId::new();
        let id2 = RateCardId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let id1 = RateCardId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = RateCardId::new_v7();
        let uuid1: Uuid = id1.into();
        let uuid2: Uuid = id2.into();
        assert!(uuid1 < uuid2);
    }

    #[test]
    fn test_from_uuid() {
        let uuid = Uuid::new_v4();
        let id = RateCardId::from_uuid(uuid);
        assert_eq!(*id.as_uuid(), uuid);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(RateCardId::prefix(), "RTC");
    }

    #[test]
    fn test_from_str_with_and_without_prefix() {
        let original = RateCardId::new();
        let with_prefix: RateCardId = original.to_string().parse().unwrap();
        let bare: RateCardId = original.as_uuid().to_string().parse().unwrap();
        assert_eq!(original, with_prefix);
        assert_eq!(original, bare);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("RTC-not-a-uuid".parse::<RateCardId>().is_err());
    }
}

mod account_id_tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let id = AccountId::new();
        assert!(id.to_string().starts_with("ACC-"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let uuid = Uuid::new_v4();
        let id = AccountId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}
