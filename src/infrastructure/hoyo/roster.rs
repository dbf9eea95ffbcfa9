//! Hardcoded Zenless Zone Zero agent roster.

use crate::domain::entities::ResourceItem;

const AVATAR_BASE: &str =
    "https://act-webstatic.mihoyo.com/game_record/zzz/role_square_avatar/role_square_avatar_";

/// `(id, name, rarity)` of every known agent.
const AGENTS: [(&str, &str, u8); 27] = [
    ("1011", "安比·德玛拉", 4),
    ("1021", "妮可·德玛拉", 4),
    ("1031", "比利·基德", 4),
    ("1041", "艾莲·乔", 5),
    ("1061", "莱卡恩", 5),
    ("1081", "格莉丝", 4),
    ("1091", "可琳", 4),
    ("1101", "珠", 5),
    ("1111", "本", 4),
    ("1121", "露西", 4),
    ("1131", "派派", 4),
    ("1141", "11号", 5),
    ("1151", "苍角", 5),
    ("1161", "赛斯", 4),
    ("1171", "索恩", 5),
    ("1181", "猫又", 5),
    ("1191", "安东", 4),
    ("1201", "简", 5),
    ("1211", "朱鸢", 5),
    ("1221", "雅", 5),
    ("1241", "丽娜", 5),
    ("1251", "塞斯", 5),
    ("1261", "千冬", 5),
    ("1271", "哈露", 5),
    ("1281", "紫月", 5),
    ("1311", "燕秋", 5),
    ("1381", "灵", 5),
];

/// Returns the roster sorted by descending rarity, then name.
#[must_use]
pub fn agents() -> Vec<ResourceItem> {
    let mut items: Vec<_> = AGENTS
        .iter()
        .map(|&(id, name, rarity)| ResourceItem {
            id: id.to_string(),
            name: name.to_string(),
            rarity,
            element: String::new(),
            icon_url: format!("{AVATAR_BASE}{id}.png"),
            filename: format!("zzz_{id}.png"),
        })
        .collect();

    ResourceItem::sort_by_rarity(&mut items);
    items
}
