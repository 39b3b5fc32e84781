//! # 命理查表数据
//!
//! 全部按传统序号索引:天干 甲 = 0 … 癸 = 9,地支 子 = 0 … 亥 = 11,
//! 五行 木 = 0 … 水 = 4。

use crate::types::WuXing;

/// 天干名称
pub const GAN_NAMES: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// 地支名称
pub const ZHI_NAMES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// 天干五行:甲乙木、丙丁火、戊己土、庚辛金、壬癸水
pub const GAN_WUXING: [WuXing; 10] = [
    WuXing::Mu,
    WuXing::Mu,
    WuXing::Huo,
    WuXing::Huo,
    WuXing::Tu,
    WuXing::Tu,
    WuXing::Jin,
    WuXing::Jin,
    WuXing::Shui,
    WuXing::Shui,
];

/// 地支五行
pub const ZHI_WUXING: [WuXing; 12] = [
    WuXing::Shui, // 子
    WuXing::Tu,   // 丑
    WuXing::Mu,   // 寅
    WuXing::Mu,   // 卯
    WuXing::Tu,   // 辰
    WuXing::Huo,  // 巳
    WuXing::Huo,  // 午
    WuXing::Tu,   // 未
    WuXing::Jin,  // 申
    WuXing::Jin,  // 酉
    WuXing::Tu,   // 戌
    WuXing::Shui, // 亥
];

/// 藏干空位标记
pub const INVALID_GAN: u8 = 0xFF;

/// 地支藏干,每支最多三干,空位以 [`INVALID_GAN`] 填充
pub const CANGGAN: [[u8; 3]; 12] = [
    [9, INVALID_GAN, INVALID_GAN], // 子: 癸
    [5, 9, 7],                     // 丑: 己癸辛
    [0, 2, 4],                     // 寅: 甲丙戊
    [1, INVALID_GAN, INVALID_GAN], // 卯: 乙
    [4, 1, 9],                     // 辰: 戊乙癸
    [2, 4, 6],                     // 巳: 丙戊庚
    [3, 5, INVALID_GAN],           // 午: 丁己
    [5, 3, 1],                     // 未: 己丁乙
    [6, 8, 4],                     // 申: 庚壬戊
    [7, INVALID_GAN, INVALID_GAN], // 酉: 辛
    [4, 7, 3],                     // 戌: 戊辛丁
    [8, 0, INVALID_GAN],           // 亥: 壬甲
];

/// 天干五合:甲己、乙庚、丙辛、丁壬、戊癸
pub const TIANGAN_HE_PAIRS: [(u8, u8); 5] = [(0, 5), (1, 6), (2, 7), (3, 8), (4, 9)];

/// 天干相冲:冲者为本干顺数第七位(序号 +6 mod 10)
pub const TIANGAN_CHONG_PAIRS: [(u8, u8); 10] = [
    (0, 6), // 甲庚
    (1, 7), // 乙辛
    (2, 8), // 丙壬
    (3, 9), // 丁癸
    (4, 0), // 戊甲
    (5, 1), // 己乙
    (6, 2), // 庚丙
    (7, 3), // 辛丁
    (8, 4), // 壬戊
    (9, 5), // 癸己
];

/// 地支六合:子丑、寅亥、卯戌、辰酉、巳申、午未
pub const DIZHI_LIUHE_PAIRS: [(u8, u8); 6] = [(0, 1), (2, 11), (3, 10), (4, 9), (5, 8), (6, 7)];

/// 地支六冲:子午、丑未、寅申、卯酉、辰戌、巳亥
pub const DIZHI_LIUCHONG_PAIRS: [(u8, u8); 6] = [(0, 6), (1, 7), (2, 8), (3, 9), (4, 10), (5, 11)];

/// 神煞锚支,按三合局判别值索引:
/// 申子辰见巳、巳酉丑见寅、寅午戌见亥、亥卯未见申
pub const SHENSHA_ANCHOR: [u8; 4] = [5, 2, 11, 8];

/// 十二运星长生锚支,按天干索引
pub const YUNXING_ANCHOR: [u8; 10] = [3, 4, 2, 3, 5, 6, 8, 9, 11, 0];

/// 十二运星表 `[天干][地支] -> 运星判别值`
///
/// 由锚支与顺逆规则展开:阳干自长生顺行,阴干逆行。
pub const YUNXING_TABLE: [[u8; 12]; 10] = [
    [9, 10, 11, 0, 1, 2, 3, 4, 5, 6, 7, 8],  // 甲: 长生在卯,顺行
    [4, 3, 2, 1, 0, 11, 10, 9, 8, 7, 6, 5],  // 乙: 长生在辰,逆行
    [10, 11, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9],  // 丙: 长生在寅,顺行
    [3, 2, 1, 0, 11, 10, 9, 8, 7, 6, 5, 4],  // 丁: 长生在卯,逆行
    [7, 8, 9, 10, 11, 0, 1, 2, 3, 4, 5, 6],  // 戊: 长生在巳,顺行
    [6, 5, 4, 3, 2, 1, 0, 11, 10, 9, 8, 7],  // 己: 长生在午,逆行
    [4, 5, 6, 7, 8, 9, 10, 11, 0, 1, 2, 3],  // 庚: 长生在申,顺行
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0, 11, 10],  // 辛: 长生在酉,逆行
    [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0],  // 壬: 长生在亥,顺行
    [0, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1],  // 癸: 长生在子,逆行
];

/// 十神表 `[日干][他干] -> 十神判别值`
///
/// 传统命书定表,阴阳取用在不同日主上并不整齐划一,
/// 故整表收录,不由生克循环推导。
pub const SHISHEN_TABLE: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 5, 4, 7, 6, 9, 8], // 甲
    [1, 0, 3, 2, 4, 5, 6, 7, 8, 9], // 乙
    [8, 9, 0, 1, 2, 3, 5, 4, 7, 6], // 丙
    [9, 8, 1, 0, 3, 2, 4, 5, 6, 7], // 丁
    [7, 6, 8, 9, 0, 1, 2, 3, 5, 4], // 戊
    [6, 7, 9, 8, 1, 0, 3, 2, 4, 5], // 己
    [4, 5, 7, 6, 8, 9, 0, 1, 2, 3], // 庚
    [5, 4, 6, 7, 9, 8, 1, 0, 3, 2], // 辛
    [3, 2, 4, 5, 7, 6, 8, 9, 0, 1], // 壬
    [2, 3, 5, 4, 6, 7, 9, 8, 1, 0], // 癸
];
