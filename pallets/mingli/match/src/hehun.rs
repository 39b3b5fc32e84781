//! # 八字合婚算法
//!
//! 基于双方四柱干支关系、五行分布互补与配偶星的合婚评分。
//!
//! ## 评分构成
//!
//! - **干支关系**: 4x4 天干对(五合 +1 / 相冲 -1)加 4x4 地支对
//!   (同局 +2 / 六合 +1 / 六冲 -2)
//! - **五行互补**: 逐行比较双方分布,差 0 得 +2、差 1 得 +1、其余 -1
//! - **配偶星**: 对方天干中五行为我日主所生之行者,每向封顶 3,双向合计
//! - **总分**: `clamp(50 + 3*互补 + 2*关系 + 3*配偶星, 0, 100)`
//!
//! 三项子分与总分对调换双方完全对称。

use pallet_mingli_common::calculations::{
    is_dizhi_liuchong, is_dizhi_liuhe, is_dizhi_sanhe, is_tiangan_chong, is_tiangan_he,
};
use pallet_mingli_common::{DiZhi, HeHunScore, SiZhu, TianGan, WuXingCount};

/// 单对天干评分:五合 +1,相冲 -1,无关 0
pub fn tiangan_relation(gan1: TianGan, gan2: TianGan) -> i16 {
    if is_tiangan_he(gan1, gan2) {
        1
    } else if is_tiangan_chong(gan1, gan2) {
        -1
    } else {
        0
    }
}

/// 单对地支评分:同局 +2,六合 +1,六冲 -2,无关 0
///
/// 三类关系两两互斥,判定顺序不影响结果。
pub fn dizhi_relation(zhi1: DiZhi, zhi2: DiZhi) -> i16 {
    if is_dizhi_sanhe(zhi1, zhi2) {
        2
    } else if is_dizhi_liuhe(zhi1, zhi2) {
        1
    } else if is_dizhi_liuchong(zhi1, zhi2) {
        -2
    } else {
        0
    }
}

/// 双方全部 4x4 干对与 4x4 支对的关系分合计
pub fn ganzhi_relation_sum(sizhu1: &SiZhu, sizhu2: &SiZhu) -> i16 {
    let mut sum = 0i16;
    for gan1 in sizhu1.gans() {
        for gan2 in sizhu2.gans() {
            sum += tiangan_relation(gan1, gan2);
        }
    }
    for zhi1 in sizhu1.zhis() {
        for zhi2 in sizhu2.zhis() {
            sum += dizhi_relation(zhi1, zhi2);
        }
    }
    sum
}

/// 五行互补分,合计范围 [-5, 10]
pub fn wuxing_synergy(count1: &WuXingCount, count2: &WuXingCount) -> i8 {
    let mut sum = 0i8;
    for i in 0..5 {
        let diff = (count1.counts[i] as i8 - count2.counts[i] as i8).abs();
        sum += match diff {
            0 => 2,
            1 => 1,
            _ => -1,
        };
    }
    sum
}

/// 单向配偶星计数
///
/// 我之日主所生之行即配偶星五行,数对方四柱天干中属该行者,封顶 3。
pub fn spouse_star_count(subject: &SiZhu, partner: &SiZhu) -> u8 {
    let target = subject.day_gan().to_wuxing().sheng();
    let count = partner
        .gans()
        .iter()
        .filter(|gan| gan.to_wuxing() == target)
        .count() as u8;
    count.min(3)
}

/// 子分合成总分,越界截断到 [0, 100]
fn final_score(synergy: i8, relation: i16, spouse_star: u8) -> u8 {
    let raw = 50i32 + 3 * synergy as i32 + 2 * relation as i32 + 3 * spouse_star as i32;
    raw.clamp(0, 100) as u8
}

/// 合婚综合评分
pub fn calculate_hehun_score(sizhu1: &SiZhu, sizhu2: &SiZhu) -> HeHunScore {
    let count1 = WuXingCount::from_sizhu(sizhu1);
    let count2 = WuXingCount::from_sizhu(sizhu2);

    let wuxing_synergy = wuxing_synergy(&count1, &count2);
    let ganzhi_relation = ganzhi_relation_sum(sizhu1, sizhu2);
    let spouse_star = spouse_star_count(sizhu1, sizhu2) + spouse_star_count(sizhu2, sizhu1);

    HeHunScore {
        wuxing_synergy,
        ganzhi_relation,
        spouse_star,
        overall: final_score(wuxing_synergy, ganzhi_relation, spouse_star),
    }
}
