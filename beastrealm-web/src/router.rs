use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/handbook")]
    Handbook,
    #[at("/handbook/pet/:id")]
    HandbookPet { id: u32 },
    #[at("/inventory")]
    Inventory,
    #[at("/beast")]
    Beast,
    #[at("/beast/:id")]
    BeastDetail { id: String },
    #[at("/map")]
    Map,
    #[at("/world-chat")]
    WorldChat,
    #[at("/dragonpalace/detail-report")]
    DragonPalaceReport,
    #[at("/arena")]
    Arena,
    #[at("/arena/battle")]
    ArenaBattle,
    #[at("/arena/streak")]
    ArenaStreak,
    #[at("/king")]
    King,
    #[at("/king/ranking")]
    KingRanking,
    #[at("/pvp")]
    Pvp,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Heading for screens that only have a placeholder in this client.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "首页",
            Self::Login => "登录",
            Self::Handbook | Self::HandbookPet { .. } => "图鉴",
            Self::Inventory => "背包",
            Self::Beast | Self::BeastDetail { .. } => "幻兽",
            Self::Map => "地图",
            Self::WorldChat => "世界聊天",
            Self::DragonPalaceReport => "详细战报",
            Self::Arena | Self::ArenaBattle => "擂台",
            Self::ArenaStreak => "连胜竞技场",
            Self::King | Self::KingRanking => "召唤之王",
            Self::Pvp => "切磋",
            Self::NotFound => "页面不存在",
        }
    }

    /// Map an in-app path produced by the core (e.g. an item-use target).
    #[must_use]
    pub fn from_app_path(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Self::NotFound)
    }
}
