//! Items that are "used" by jumping to another screen rather than in place.

/// Item ids with a fixed destination, checked before any name rule.
pub const ITEM_USE_ROUTES: [(u32, &str); 4] = [
    // 喇叭
    (4004, "/world-chat"),
    (6012, "/world-chat"),
    // 捕捉球 / 强力捕捉球
    (4002, "/map"),
    (4003, "/map"),
];

const BONE_MARKERS: [&str; 8] = ["骨", "头骨", "尾骨", "手骨", "腿骨", "胸骨", "臂骨", "元魂"];

/// Screen to open when the player uses `item_id`, or `None` to use it in place.
#[must_use]
pub fn item_use_route(item_id: u32, name: &str) -> Option<&'static str> {
    if let Some((_, route)) = ITEM_USE_ROUTES.iter().find(|(id, _)| *id == item_id) {
        return Some(*route);
    }

    if name.contains("喇叭") {
        return Some("/world-chat");
    }
    if name.contains("捕捉球") {
        return Some("/map");
    }
    // Skill books and bone items both need a beast picked first.
    if name.contains("技能书") || name.contains('书') {
        return Some("/beast");
    }
    let bone_scroll = name.contains("卷轴") && BONE_MARKERS.iter().any(|m| name.contains(m));
    if name.contains("战骨") || bone_scroll {
        return Some("/beast");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::item_use_route;

    #[test]
    fn id_table_wins() {
        assert_eq!(item_use_route(4004, "随便"), Some("/world-chat"));
        assert_eq!(item_use_route(4003, ""), Some("/map"));
    }

    #[test]
    fn name_rules_apply_in_order() {
        assert_eq!(item_use_route(1, "世界喇叭"), Some("/world-chat"));
        assert_eq!(item_use_route(1, "高级捕捉球"), Some("/map"));
        assert_eq!(item_use_route(10001, "技能书·烈焰"), Some("/beast"));
        assert_eq!(item_use_route(9101, "战骨·天狼"), Some("/beast"));
        assert_eq!(item_use_route(5001, "头骨卷轴"), Some("/beast"));
    }

    #[test]
    fn plain_items_use_in_place() {
        assert_eq!(item_use_route(1, "召唤球"), None);
        assert_eq!(item_use_route(1, "金币袋"), None);
        assert_eq!(item_use_route(1, "传送卷轴"), None);
    }
}
