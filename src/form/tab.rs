use crate::i18n::keys;

/// 화면 탭. 항상 하나만 활성화된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Calculator,
    Settings,
    About,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Calculator, Tab::Settings, Tab::About];

    pub fn label_key(self) -> &'static str {
        match self {
            Tab::Calculator => keys::TAB_CALCULATOR,
            Tab::Settings => keys::TAB_SETTINGS,
            Tab::About => keys::TAB_ABOUT,
        }
    }

    /// 탭 식별자("calculator" 등)로 찾는다.
    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            Tab::Calculator => "calculator",
            Tab::Settings => "settings",
            Tab::About => "about",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Tab::from_id("unknown"), None);
    }

    #[test]
    fn selection_is_exclusive() {
        let mut active = Tab::default();
        assert_eq!(active, Tab::Calculator);
        active = Tab::Settings;
        let selected: Vec<Tab> = Tab::ALL.into_iter().filter(|t| *t == active).collect();
        assert_eq!(selected, vec![Tab::Settings]);
    }
}
