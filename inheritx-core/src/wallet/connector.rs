//! The fixed set of supported wallet connectors.

use serde::Serialize;

/// A wallet the user can pick in the connect modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct WalletConnector {
    /// Module id understood by the wallet kit.
    pub id: &'static str,
    /// Label shown in the modal.
    pub display_name: &'static str,
    /// Icon path served by the front-end.
    pub icon: &'static str,
}

/// Supported connectors, in display order.
pub const SUPPORTED_WALLETS: [WalletConnector; 5] = [
    WalletConnector {
        id: "freighter",
        display_name: "Freighter",
        icon: "/icons/freighter.png",
    },
    WalletConnector {
        id: "albedo",
        display_name: "Albedo",
        icon: "/icons/albedo.png",
    },
    WalletConnector {
        id: "xbull",
        display_name: "xBull",
        icon: "/icons/xbull.png",
    },
    WalletConnector {
        id: "rabet",
        display_name: "Rabet",
        icon: "/icons/rabet.png",
    },
    // Lobstr ships without its own icon yet.
    WalletConnector {
        id: "lobstr",
        display_name: "Lobstr",
        icon: "/icons/rabet.png",
    },
];

/// Look up a connector by id.
pub fn find_connector(id: &str) -> Option<&'static WalletConnector> {
    SUPPORTED_WALLETS.iter().find(|c| c.id == id)
}

/// Whether `id` names a supported connector.
pub fn is_supported(id: &str) -> bool {
    find_connector(id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(find_connector("xbull").map(|c| c.display_name), Some("xBull"));
        assert!(is_supported("freighter"));
        assert!(!is_supported("Freighter"));
        assert!(!is_supported("metamask"));
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in SUPPORTED_WALLETS.iter().enumerate() {
            for b in &SUPPORTED_WALLETS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
