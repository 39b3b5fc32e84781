//! # 命理计算引擎
//!
//! 四柱解析、十神、十二运星、神煞与干支关系判定。
//! 全部为纯函数,输入经校验后查表,同一输入永远得到同一输出。

use crate::constants::*;
use crate::types::*;

// ============================================================================
// 四柱解析
// ============================================================================

/// 时辰换算地支:23-1 点为子时,每两小时一支
pub fn hour_zhi(hour: u8) -> Result<DiZhi, PaiPanError> {
    if hour > 23 {
        return Err(PaiPanError::InvalidHour);
    }
    Ok(DiZhi(((hour + 1) / 2) % 12))
}

/// 校验并组装单柱
pub fn resolve_pillar(input: PillarInput) -> Result<GanZhi, PaiPanError> {
    let gan = TianGan::new(input.gan).ok_or(PaiPanError::InvalidGanIndex)?;
    let zhi = DiZhi::new(input.zhi).ok_or(PaiPanError::InvalidZhiIndex)?;
    GanZhi::try_new(gan, zhi)
}

/// 组装四柱
///
/// 年月日三柱由外部历法换算后传入;时柱的地支由时辰推出,
/// 时干按日干起时规则同样由外部给定,此处只校验奇偶一致。
pub fn resolve_sizhu(
    year: PillarInput,
    month: PillarInput,
    day: PillarInput,
    hour_gan: u8,
    hour: u8,
) -> Result<SiZhu, PaiPanError> {
    let year = resolve_pillar(year)?;
    let month = resolve_pillar(month)?;
    let day = resolve_pillar(day)?;
    let zhi = hour_zhi(hour)?;
    let gan = TianGan::new(hour_gan).ok_or(PaiPanError::InvalidGanIndex)?;
    let hour = GanZhi::try_new(gan, zhi)?;
    Ok(SiZhu {
        year,
        month,
        day,
        hour,
    })
}

// ============================================================================
// 干支关系判定
// ============================================================================

/// 天干五合
pub fn is_tiangan_he(gan1: TianGan, gan2: TianGan) -> bool {
    TIANGAN_HE_PAIRS
        .iter()
        .any(|&(a, b)| (gan1.0 == a && gan2.0 == b) || (gan1.0 == b && gan2.0 == a))
}

/// 天干相冲
pub fn is_tiangan_chong(gan1: TianGan, gan2: TianGan) -> bool {
    TIANGAN_CHONG_PAIRS
        .iter()
        .any(|&(a, b)| (gan1.0 == a && gan2.0 == b) || (gan1.0 == b && gan2.0 == a))
}

/// 地支六合
pub fn is_dizhi_liuhe(zhi1: DiZhi, zhi2: DiZhi) -> bool {
    DIZHI_LIUHE_PAIRS
        .iter()
        .any(|&(a, b)| (zhi1.0 == a && zhi2.0 == b) || (zhi1.0 == b && zhi2.0 == a))
}

/// 地支六冲
pub fn is_dizhi_liuchong(zhi1: DiZhi, zhi2: DiZhi) -> bool {
    DIZHI_LIUCHONG_PAIRS
        .iter()
        .any(|&(a, b)| (zhi1.0 == a && zhi2.0 == b) || (zhi1.0 == b && zhi2.0 == a))
}

/// 地支同局(三合),同支亦视为同局
pub fn is_dizhi_sanhe(zhi1: DiZhi, zhi2: DiZhi) -> bool {
    zhi1.san_he_ju() == zhi2.san_he_ju()
}

/// 五行相生
pub fn is_wuxing_sheng(from: WuXing, to: WuXing) -> bool {
    from.sheng() == to
}

/// 五行相克
pub fn is_wuxing_ke(from: WuXing, to: WuXing) -> bool {
    from.ke() == to
}

// ============================================================================
// 十神
// ============================================================================

/// 他干相对日主的十神
pub fn shi_shen(day_gan: TianGan, other: TianGan) -> ShiShen {
    let index = SHISHEN_TABLE[day_gan.0 as usize][other.0 as usize];
    ShiShen::from_index(index).unwrap_or(ShiShen::BiJian)
}

/// 地支藏干
pub fn canggan_of(zhi: DiZhi) -> [Option<TianGan>; 3] {
    let row = CANGGAN[zhi.0 as usize];
    let mut result = [None; 3];
    for (slot, &gan) in result.iter_mut().zip(row.iter()) {
        if gan != INVALID_GAN {
            *slot = Some(TianGan(gan));
        }
    }
    result
}

/// 地支藏干相对日主的十神
pub fn shi_shen_of_zhi(day_gan: TianGan, zhi: DiZhi) -> [Option<CangGanShiShen>; 3] {
    let mut result = [None; 3];
    for (slot, gan) in result.iter_mut().zip(canggan_of(zhi).iter()) {
        if let Some(gan) = gan {
            *slot = Some(CangGanShiShen {
                gan: *gan,
                shi_shen: shi_shen(day_gan, *gan),
            });
        }
    }
    result
}

// ============================================================================
// 十二运星
// ============================================================================

/// 日主在某支上的十二运星
pub fn yun_xing(day_gan: TianGan, zhi: DiZhi) -> YunXing {
    let index = YUNXING_TABLE[day_gan.0 as usize][zhi.0 as usize];
    YunXing::from_index(index).unwrap_or(YunXing::ChangSheng)
}

// ============================================================================
// 神煞
// ============================================================================

/// 某支相对日支的神煞
///
/// 日支定三合局,局定锚支,神煞为该支距锚支的顺行位次。
pub fn shen_sha(day_zhi: DiZhi, zhi: DiZhi) -> ShenSha {
    let anchor = SHENSHA_ANCHOR[day_zhi.san_he_ju() as usize];
    let offset = (zhi.0 + 12 - anchor) % 12;
    ShenSha::from_index(offset).unwrap_or(ShenSha::DiSha)
}

/// 某神煞相对日支落在哪一支(正向投影的逆运算)
pub fn shen_sha_zhi(day_zhi: DiZhi, sha: ShenSha) -> DiZhi {
    let anchor = SHENSHA_ANCHOR[day_zhi.san_he_ju() as usize];
    DiZhi((anchor + sha as u8) % 12)
}

// ============================================================================
// 解盘明细
// ============================================================================

/// 单柱解盘明细,参照系为日柱
pub fn zhu_detail(day: GanZhi, pillar: GanZhi) -> ZhuDetail {
    ZhuDetail {
        ganzhi: pillar,
        gan_wuxing: pillar.gan.to_wuxing(),
        zhi_wuxing: pillar.zhi.to_wuxing(),
        shi_shen: shi_shen(day.gan, pillar.gan),
        canggan: shi_shen_of_zhi(day.gan, pillar.zhi),
        yun_xing: yun_xing(day.gan, pillar.zhi),
        shen_sha: shen_sha(day.zhi, pillar.zhi),
    }
}

/// 四柱解盘明细
pub fn sizhu_detail(sizhu: &SiZhu) -> SiZhuDetail {
    SiZhuDetail {
        year: zhu_detail(sizhu.day, sizhu.year),
        month: zhu_detail(sizhu.day, sizhu.month),
        day: zhu_detail(sizhu.day, sizhu.day),
        hour: zhu_detail(sizhu.day, sizhu.hour),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JIA: TianGan = TianGan(0);
    const YI: TianGan = TianGan(1);
    const BING: TianGan = TianGan(2);
    const JI: TianGan = TianGan(5);
    const GENG: TianGan = TianGan(6);
    const REN: TianGan = TianGan(8);
    const GUI: TianGan = TianGan(9);

    const ZI: DiZhi = DiZhi(0);
    const CHOU: DiZhi = DiZhi(1);
    const YIN: DiZhi = DiZhi(2);
    const MAO: DiZhi = DiZhi(3);
    const CHEN: DiZhi = DiZhi(4);
    const WU: DiZhi = DiZhi(6);
    const SHEN: DiZhi = DiZhi(8);
    const XU: DiZhi = DiZhi(10);
    const HAI: DiZhi = DiZhi(11);

    #[test]
    fn hour_zhi_maps_two_hour_slots() {
        assert_eq!(hour_zhi(23), Ok(ZI));
        assert_eq!(hour_zhi(0), Ok(ZI));
        assert_eq!(hour_zhi(1), Ok(CHOU));
        assert_eq!(hour_zhi(12), Ok(WU));
        assert_eq!(hour_zhi(22), Ok(HAI));
        assert_eq!(hour_zhi(24), Err(PaiPanError::InvalidHour));
    }

    #[test]
    fn ganzhi_rejects_parity_mismatch() {
        assert!(GanZhi::try_new(JIA, ZI).is_ok());
        assert_eq!(
            GanZhi::try_new(JIA, CHOU),
            Err(PaiPanError::ParityMismatch)
        );
        assert_eq!(
            GanZhi::try_new(TianGan(10), ZI),
            Err(PaiPanError::InvalidGanIndex)
        );
        assert_eq!(
            GanZhi::try_new(JIA, DiZhi(12)),
            Err(PaiPanError::InvalidZhiIndex)
        );
    }

    #[test]
    fn sexagenary_index_roundtrips() {
        for i in 0..60 {
            let ganzhi = GanZhi::from_index(i).unwrap();
            assert_eq!(ganzhi.gan.0 % 2, ganzhi.zhi.0 % 2);
            assert_eq!(ganzhi.index(), i);
        }
        assert!(GanZhi::from_index(60).is_none());
    }

    #[test]
    fn resolve_sizhu_validates_every_pillar() {
        let year = PillarInput { gan: 0, zhi: 0 };
        let month = PillarInput { gan: 2, zhi: 2 };
        let day = PillarInput { gan: 4, zhi: 4 };
        let sizhu = resolve_sizhu(year, month, day, 8, 23).unwrap();
        assert_eq!(sizhu.day_gan(), TianGan(4));
        assert_eq!(sizhu.hour, GanZhi { gan: REN, zhi: ZI });

        let bad = PillarInput { gan: 10, zhi: 0 };
        assert_eq!(
            resolve_sizhu(bad, month, day, 8, 23),
            Err(PaiPanError::InvalidGanIndex)
        );
        assert_eq!(
            resolve_sizhu(year, month, day, 8, 24),
            Err(PaiPanError::InvalidHour)
        );
        // 时干奇偶与子时不合
        assert_eq!(
            resolve_sizhu(year, month, day, 9, 23),
            Err(PaiPanError::ParityMismatch)
        );
    }

    #[test]
    fn tiangan_relations_are_symmetric() {
        assert!(is_tiangan_he(JIA, JI));
        assert!(is_tiangan_he(JI, JIA));
        assert!(!is_tiangan_he(JIA, YI));

        assert!(is_tiangan_chong(JIA, GENG));
        assert!(is_tiangan_chong(GENG, JIA));
        assert!(is_tiangan_chong(JI, YI));
        assert!(!is_tiangan_chong(JIA, JI));
    }

    #[test]
    fn dizhi_relations_are_symmetric() {
        assert!(is_dizhi_liuhe(ZI, CHOU));
        assert!(is_dizhi_liuhe(CHOU, ZI));
        assert!(!is_dizhi_liuhe(ZI, YIN));

        assert!(is_dizhi_liuchong(ZI, WU));
        assert!(is_dizhi_liuchong(WU, ZI));
        assert!(!is_dizhi_liuchong(ZI, CHOU));

        assert!(is_dizhi_sanhe(SHEN, CHEN));
        assert!(is_dizhi_sanhe(ZI, ZI));
        assert!(!is_dizhi_sanhe(ZI, CHOU));
    }

    #[test]
    fn wuxing_cycles() {
        assert!(is_wuxing_sheng(WuXing::Mu, WuXing::Huo));
        assert!(is_wuxing_sheng(WuXing::Shui, WuXing::Mu));
        assert!(!is_wuxing_sheng(WuXing::Mu, WuXing::Tu));

        assert!(is_wuxing_ke(WuXing::Mu, WuXing::Tu));
        assert!(is_wuxing_ke(WuXing::Jin, WuXing::Mu));
        assert!(!is_wuxing_ke(WuXing::Mu, WuXing::Huo));
    }

    #[test]
    fn shi_shen_known_cases() {
        // 甲日主见己土为正财
        assert_eq!(shi_shen(JIA, JI), ShiShen::ZhengCai);
        assert_eq!(shi_shen(JIA, JIA), ShiShen::BiJian);
        assert_eq!(shi_shen(JIA, YI), ShiShen::JieCai);
        assert_eq!(shi_shen(BING, JIA), ShiShen::ZhengYin);
        assert_eq!(shi_shen(GUI, REN), ShiShen::JieCai);
    }

    #[test]
    fn shi_shen_table_rows_are_permutations() {
        for day in 0..10u8 {
            let mut seen = [false; 10];
            for other in 0..10u8 {
                let index = SHISHEN_TABLE[day as usize][other as usize];
                assert!(ShiShen::from_index(index).is_some());
                assert!(!seen[index as usize]);
                seen[index as usize] = true;
            }
        }
    }

    #[test]
    fn canggan_rows() {
        assert_eq!(canggan_of(ZI), [Some(GUI), None, None]);
        assert_eq!(canggan_of(YIN), [Some(JIA), Some(BING), Some(TianGan(4))]);
        assert_eq!(canggan_of(HAI), [Some(REN), Some(JIA), None]);
    }

    #[test]
    fn shi_shen_of_zhi_follows_canggan() {
        let result = shi_shen_of_zhi(JIA, ZI);
        assert_eq!(
            result[0],
            Some(CangGanShiShen {
                gan: GUI,
                shi_shen: ShiShen::ZhengYin,
            })
        );
        assert_eq!(result[1], None);
        assert_eq!(result[2], None);
    }

    #[test]
    fn yun_xing_table_matches_direction_rule() {
        for gan in 0..10u8 {
            let anchor = YUNXING_ANCHOR[gan as usize];
            for zhi in 0..12u8 {
                let expected = if gan % 2 == 0 {
                    (zhi + 12 - anchor) % 12
                } else {
                    (anchor + 12 - zhi) % 12
                };
                assert_eq!(YUNXING_TABLE[gan as usize][zhi as usize], expected);
            }
        }
    }

    #[test]
    fn yun_xing_per_stem_is_bijective() {
        for gan in 0..10u8 {
            let mut seen = [false; 12];
            for zhi in 0..12u8 {
                let stage = yun_xing(TianGan(gan), DiZhi(zhi)) as usize;
                assert!(!seen[stage]);
                seen[stage] = true;
            }
        }
    }

    #[test]
    fn yun_xing_known_cases() {
        // 甲长生在卯
        assert_eq!(yun_xing(JIA, MAO), YunXing::ChangSheng);
        // 乙长生在辰,逆行
        assert_eq!(yun_xing(YI, CHEN), YunXing::ChangSheng);
        assert_eq!(yun_xing(YI, MAO), YunXing::MuYu);
        // 癸长生在子
        assert_eq!(yun_xing(GUI, ZI), YunXing::ChangSheng);
    }

    #[test]
    fn shen_sha_known_cases() {
        // 日支午属寅午戌局,锚支亥
        assert_eq!(shen_sha(WU, HAI), ShenSha::DiSha);
        assert_eq!(shen_sha(WU, XU), ShenSha::PanAn);
        // 日支子属申子辰局,锚支巳
        assert_eq!(shen_sha(ZI, DiZhi(5)), ShenSha::DiSha);
    }

    #[test]
    fn shen_sha_projections_agree() {
        for day in 0..12u8 {
            let day_zhi = DiZhi(day);
            let mut seen = [false; 12];
            for index in 0..12u8 {
                let sha = ShenSha::from_index(index).unwrap();
                let zhi = shen_sha_zhi(day_zhi, sha);
                assert_eq!(shen_sha(day_zhi, zhi), sha);
                assert!(!seen[zhi.0 as usize]);
                seen[zhi.0 as usize] = true;
            }
        }
    }

    #[test]
    fn wuxing_count_tally_and_ties() {
        let sizhu = resolve_sizhu(
            PillarInput { gan: 0, zhi: 2 }, // 甲寅: 木木
            PillarInput { gan: 2, zhi: 6 }, // 丙午: 火火
            PillarInput { gan: 0, zhi: 0 }, // 甲子: 木水
            8,                              // 壬: 水
            23,                             // 子: 水
        )
        .unwrap();
        let count = WuXingCount::from_sizhu(&sizhu);
        assert_eq!(count.counts, [3, 2, 0, 0, 3]);
        assert_eq!(count.total(), 8);
        // 木水同为 3,按 木火土金水 取木
        assert_eq!(count.dominant(), WuXing::Mu);
        // 土金同为 0,取土
        assert_eq!(count.weakest(), WuXing::Tu);

        let empty = WuXingCount::tally(&[]);
        assert_eq!(empty.total(), 0);
    }

    #[test]
    fn sizhu_detail_uses_day_pillar_as_reference() {
        let sizhu = resolve_sizhu(
            PillarInput { gan: 0, zhi: 0 }, // 甲子
            PillarInput { gan: 2, zhi: 2 }, // 丙寅
            PillarInput { gan: 0, zhi: 6 }, // 甲午
            8,
            23,
        )
        .unwrap();
        let detail = sizhu_detail(&sizhu);

        assert_eq!(detail.day.shi_shen, ShiShen::BiJian);
        assert_eq!(detail.month.shi_shen, ShiShen::ShiShen);
        assert_eq!(detail.hour.shi_shen, ShiShen::PianYin);
        assert_eq!(detail.year.gan_wuxing, WuXing::Mu);
        assert_eq!(detail.year.zhi_wuxing, WuXing::Shui);
        // 日支午定局,亥为地煞
        assert_eq!(detail.year.shen_sha, shen_sha(WU, ZI));
        assert_eq!(detail.day.yun_xing, yun_xing(JIA, WU));
    }
}
