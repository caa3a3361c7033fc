//! Function-key shortcuts
//!
//! Views subscribe handlers for function keys while they are active and drop
//! them on exit. Dispatch only reaches handlers of the view that is named.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FunctionKey {
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

impl FunctionKey {
    pub const ALL: [FunctionKey; 12] = [
        Self::F1,
        Self::F2,
        Self::F3,
        Self::F4,
        Self::F5,
        Self::F6,
        Self::F7,
        Self::F8,
        Self::F9,
        Self::F10,
        Self::F11,
        Self::F12,
    ];

    /// 1 for F1 through 12 for F12
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(n: u8) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i as usize).copied())
    }
}

impl fmt::Display for FunctionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.number())
    }
}

impl FromStr for FunctionKey {
    type Err = String;

    /// Parse a key event name such as `"F9"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .strip_prefix(['F', 'f'])
            .and_then(|n| n.parse::<u8>().ok())
            .and_then(Self::from_number)
            .ok_or_else(|| format!("not a function key: {}", s))
    }
}

/// How master-record fields are filled in (toggled with F11)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Open the search dialog
    #[default]
    DialogSearch,
    /// Type codes directly
    DirectInput,
}

impl InputMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::DialogSearch => Self::DirectInput,
            Self::DirectInput => Self::DialogSearch,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DialogSearch => "ダイアログ検索",
            Self::DirectInput => "直接入力",
        }
    }
}

/// One slot of the footer key bar
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FooterLabel {
    pub key: FunctionKey,
    pub label: String,
    /// False for keys with no action (shown greyed out)
    pub active: bool,
}

/// Footer key bar for the given input mode
pub fn footer_labels(mode: InputMode) -> Vec<FooterLabel> {
    FunctionKey::ALL
        .iter()
        .map(|&key| {
            let action = match key {
                FunctionKey::F1 => Some("ヘルプ"),
                FunctionKey::F3 => Some("検索"),
                FunctionKey::F4 => Some("クリア"),
                FunctionKey::F6 => Some("新規登録"),
                FunctionKey::F9 => Some("戻る"),
                FunctionKey::F11 => Some(mode.label()),
                FunctionKey::F12 => Some("終了"),
                _ => None,
            };
            FooterLabel {
                key,
                label: match action {
                    Some(action) => format!("{} {}", key, action),
                    None => key.to_string(),
                },
                active: action.is_some(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler = Arc<dyn Fn() + Send + Sync>;

struct Subscription {
    id: SubscriptionId,
    view: String,
    key: FunctionKey,
    handler: Handler,
}

/// Registry of function-key handlers scoped to views
pub struct ShortcutRegistry {
    subscriptions: RwLock<Vec<Subscription>>,
    next_id: AtomicU64,
}

static GLOBAL: LazyLock<ShortcutRegistry> = LazyLock::new(ShortcutRegistry::new);

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShortcutRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortcutRegistry")
            .field("subscriptions", &self.subscriptions.read().len())
            .finish()
    }
}

impl ShortcutRegistry {
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Process-wide registry
    pub fn global() -> &'static ShortcutRegistry {
        &GLOBAL
    }

    pub fn subscribe(
        &self,
        view: impl Into<String>,
        key: FunctionKey,
        handler: impl Fn() + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let view = view.into();
        tracing::debug!(view = %view, %key, id = id.0, "Shortcut subscribed");
        self.subscriptions.write().push(Subscription {
            id,
            view,
            key,
            handler: Arc::new(handler),
        });
        id
    }

    /// Remove one subscription; returns false when it was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.subscriptions.write();
        let before = subs.len();
        subs.retain(|s| s.id != id);
        subs.len() != before
    }

    /// Remove every subscription of a view (the view was closed)
    pub fn unsubscribe_view(&self, view: &str) -> usize {
        let mut subs = self.subscriptions.write();
        let before = subs.len();
        subs.retain(|s| s.view != view);
        let removed = before - subs.len();
        tracing::debug!(view, removed, "Shortcuts released");
        removed
    }

    /// Run the handlers bound to `key` in `view`, latest subscription first
    ///
    /// Handlers run after the lock is released, so they may subscribe or
    /// unsubscribe themselves. Returns whether any handler ran.
    pub fn dispatch(&self, view: &str, key: FunctionKey) -> bool {
        let handlers: Vec<Handler> = self
            .subscriptions
            .read()
            .iter()
            .rev()
            .filter(|s| s.view == view && s.key == key)
            .map(|s| Arc::clone(&s.handler))
            .collect();

        for handler in &handlers {
            handler();
        }
        !handlers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.subscriptions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_key_names() {
        assert_eq!("F11".parse::<FunctionKey>(), Ok(FunctionKey::F11));
        assert_eq!("f1".parse::<FunctionKey>(), Ok(FunctionKey::F1));
        assert!("F13".parse::<FunctionKey>().is_err());
        assert!("F0".parse::<FunctionKey>().is_err());
        assert!("Escape".parse::<FunctionKey>().is_err());
        assert_eq!(FunctionKey::F12.to_string(), "F12");
    }

    #[test]
    fn test_dispatch_scoped_to_view() {
        let registry = ShortcutRegistry::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let h = Arc::clone(&hits);
        registry.subscribe("order_list", FunctionKey::F9, move || {
            h.fetch_add(1, Ordering::SeqCst);
        });

        assert!(registry.dispatch("order_list", FunctionKey::F9));
        assert!(!registry.dispatch("order_list", FunctionKey::F3));
        assert!(!registry.dispatch("order_history", FunctionKey::F9));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_latest_subscription_runs_first() {
        let registry = ShortcutRegistry::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second"] {
            let order = Arc::clone(&order);
            registry.subscribe("form", FunctionKey::F4, move || order.lock().push(tag));
        }

        registry.dispatch("form", FunctionKey::F4);
        assert_eq!(*order.lock(), vec!["second", "first"]);
    }

    #[test]
    fn test_unsubscribe() {
        let registry = ShortcutRegistry::new();
        let id = registry.subscribe("form", FunctionKey::F1, || {});
        registry.subscribe("form", FunctionKey::F3, || {});
        registry.subscribe("dialog", FunctionKey::F9, || {});

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert_eq!(registry.unsubscribe_view("form"), 1);
        assert_eq!(registry.len(), 1);
        assert!(!registry.dispatch("form", FunctionKey::F3));
    }

    #[test]
    fn test_handler_may_unsubscribe_itself() {
        let registry = Arc::new(ShortcutRegistry::new());
        let slot: Arc<Mutex<Option<SubscriptionId>>> = Arc::new(Mutex::new(None));

        let (r, s) = (Arc::clone(&registry), Arc::clone(&slot));
        let id = registry.subscribe("dialog", FunctionKey::F9, move || {
            if let Some(id) = s.lock().take() {
                r.unsubscribe(id);
            }
        });
        *slot.lock() = Some(id);

        assert!(registry.dispatch("dialog", FunctionKey::F9));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_input_mode_and_footer() {
        let mode = InputMode::default();
        assert_eq!(mode.toggle(), InputMode::DirectInput);
        assert_eq!(mode.toggle().toggle(), mode);

        let labels = footer_labels(InputMode::DirectInput);
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0].label, "F1 ヘルプ");
        assert_eq!(labels[1].label, "F2");
        assert!(!labels[1].active);
        assert_eq!(labels[8].label, "F9 戻る");
        assert_eq!(labels[10].label, "F11 直接入力");
        assert_eq!(footer_labels(InputMode::DialogSearch)[10].label, "F11 ダイアログ検索");
    }

    #[test]
    fn test_global_registry() {
        let view = "global_registry_test";
        let id = ShortcutRegistry::global().subscribe(view, FunctionKey::F12, || {});
        assert!(ShortcutRegistry::global().dispatch(view, FunctionKey::F12));
        assert!(ShortcutRegistry::global().unsubscribe(id));
    }
}
