//! # 命理类型定义
//!
//! 干支符号系统的封闭枚举与值对象。所有类型都是 SCALE 可编码的,
//! 枚举判别值即传统序号(甲 = 0、子 = 0 …),链上链下编码一致。

use crate::constants::*;
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

// ============================================================================
// 基础属性
// ============================================================================

/// 五行
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug, Default,
)]
pub enum WuXing {
    /// 木
    #[default]
    Mu = 0,
    /// 火
    Huo = 1,
    /// 土
    Tu = 2,
    /// 金
    Jin = 3,
    /// 水
    Shui = 4,
}

impl WuXing {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(WuXing::Mu),
            1 => Some(WuXing::Huo),
            2 => Some(WuXing::Tu),
            3 => Some(WuXing::Jin),
            4 => Some(WuXing::Shui),
            _ => None,
        }
    }

    /// 本行所生之行(木生火、火生土 …)
    pub fn sheng(&self) -> WuXing {
        match self {
            WuXing::Mu => WuXing::Huo,
            WuXing::Huo => WuXing::Tu,
            WuXing::Tu => WuXing::Jin,
            WuXing::Jin => WuXing::Shui,
            WuXing::Shui => WuXing::Mu,
        }
    }

    /// 本行所克之行(木克土、火克金 …)
    pub fn ke(&self) -> WuXing {
        match self {
            WuXing::Mu => WuXing::Tu,
            WuXing::Huo => WuXing::Jin,
            WuXing::Tu => WuXing::Shui,
            WuXing::Jin => WuXing::Mu,
            WuXing::Shui => WuXing::Huo,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WuXing::Mu => "木",
            WuXing::Huo => "火",
            WuXing::Tu => "土",
            WuXing::Jin => "金",
            WuXing::Shui => "水",
        }
    }
}

/// 阴阳
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug,
)]
pub enum YinYang {
    /// 阳
    Yang = 0,
    /// 阴
    Yin = 1,
}

// ============================================================================
// 干支符号
// ============================================================================

/// 天干,索引 0-9 对应 甲乙丙丁戊己庚辛壬癸
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug, Default,
)]
pub struct TianGan(pub u8);

impl TianGan {
    pub fn new(index: u8) -> Option<Self> {
        if index < 10 {
            Some(TianGan(index))
        } else {
            None
        }
    }

    pub fn to_wuxing(&self) -> WuXing {
        GAN_WUXING[self.0 as usize]
    }

    pub fn to_yinyang(&self) -> YinYang {
        if self.0 % 2 == 0 {
            YinYang::Yang
        } else {
            YinYang::Yin
        }
    }

    pub fn name(&self) -> &'static str {
        GAN_NAMES[self.0 as usize]
    }
}

/// 地支,索引 0-11 对应 子丑寅卯辰巳午未申酉戌亥
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug, Default,
)]
pub struct DiZhi(pub u8);

impl DiZhi {
    pub fn new(index: u8) -> Option<Self> {
        if index < 12 {
            Some(DiZhi(index))
        } else {
            None
        }
    }

    pub fn to_wuxing(&self) -> WuXing {
        ZHI_WUXING[self.0 as usize]
    }

    pub fn to_yinyang(&self) -> YinYang {
        if self.0 % 2 == 0 {
            YinYang::Yang
        } else {
            YinYang::Yin
        }
    }

    /// 本支所属三合局
    pub fn san_he_ju(&self) -> SanHeJu {
        match self.0 % 4 {
            0 => SanHeJu::ShenZiChen,
            1 => SanHeJu::SiYouChou,
            2 => SanHeJu::YinWuXu,
            _ => SanHeJu::HaiMaoWei,
        }
    }

    pub fn name(&self) -> &'static str {
        ZHI_NAMES[self.0 as usize]
    }
}

/// 干支单符号,用于不定长的取样序列(如速断取样)
#[derive(Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq, Debug)]
pub enum GanZhiSymbol {
    Gan(TianGan),
    Zhi(DiZhi),
}

impl GanZhiSymbol {
    pub fn to_wuxing(&self) -> WuXing {
        match self {
            GanZhiSymbol::Gan(gan) => gan.to_wuxing(),
            GanZhiSymbol::Zhi(zhi) => zhi.to_wuxing(),
        }
    }
}

/// 三合局,按 `支序 % 4` 分组
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug,
)]
pub enum SanHeJu {
    /// 申子辰(水局)
    ShenZiChen = 0,
    /// 巳酉丑(金局)
    SiYouChou = 1,
    /// 寅午戌(火局)
    YinWuXu = 2,
    /// 亥卯未(木局)
    HaiMaoWei = 3,
}

/// 干支组合(一柱)
///
/// 合法组合满足 `gan % 2 == zhi % 2`,即六十甲子。
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug, Default,
)]
pub struct GanZhi {
    pub gan: TianGan,
    pub zhi: DiZhi,
}

impl GanZhi {
    /// 校验奇偶一致后构造一柱
    pub fn try_new(gan: TianGan, zhi: DiZhi) -> Result<Self, PaiPanError> {
        if gan.0 >= 10 {
            return Err(PaiPanError::InvalidGanIndex);
        }
        if zhi.0 >= 12 {
            return Err(PaiPanError::InvalidZhiIndex);
        }
        if gan.0 % 2 != zhi.0 % 2 {
            return Err(PaiPanError::ParityMismatch);
        }
        Ok(GanZhi { gan, zhi })
    }

    /// 六十甲子序号 (0-59) 转干支
    pub fn from_index(index: u8) -> Option<Self> {
        if index < 60 {
            Some(GanZhi {
                gan: TianGan(index % 10),
                zhi: DiZhi(index % 12),
            })
        } else {
            None
        }
    }

    /// 干支转六十甲子序号
    pub fn index(&self) -> u8 {
        ((6 * self.gan.0 as u16 + 55 * self.zhi.0 as u16) % 60) as u8
    }
}

// ============================================================================
// 四柱
// ============================================================================

/// 单柱输入:外部历法换算好的干支序号
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug, Default,
)]
pub struct PillarInput {
    /// 天干序号 (0-9)
    pub gan: u8,
    /// 地支序号 (0-11)
    pub zhi: u8,
}

/// 四柱(年月日时)
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug, Default,
)]
pub struct SiZhu {
    pub year: GanZhi,
    pub month: GanZhi,
    pub day: GanZhi,
    pub hour: GanZhi,
}

impl SiZhu {
    /// 日主(日干)
    pub fn day_gan(&self) -> TianGan {
        self.day.gan
    }

    pub fn day_zhi(&self) -> DiZhi {
        self.day.zhi
    }

    pub fn pillars(&self) -> [GanZhi; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub fn gans(&self) -> [TianGan; 4] {
        [self.year.gan, self.month.gan, self.day.gan, self.hour.gan]
    }

    pub fn zhis(&self) -> [DiZhi; 4] {
        [self.year.zhi, self.month.zhi, self.day.zhi, self.hour.zhi]
    }

    /// 全部八字符号,按 年干年支月干月支日干日支时干时支 排列
    pub fn symbols(&self) -> [GanZhiSymbol; 8] {
        [
            GanZhiSymbol::Gan(self.year.gan),
            GanZhiSymbol::Zhi(self.year.zhi),
            GanZhiSymbol::Gan(self.month.gan),
            GanZhiSymbol::Zhi(self.month.zhi),
            GanZhiSymbol::Gan(self.day.gan),
            GanZhiSymbol::Zhi(self.day.zhi),
            GanZhiSymbol::Gan(self.hour.gan),
            GanZhiSymbol::Zhi(self.hour.zhi),
        ]
    }
}

// ============================================================================
// 十神 / 十二运星 / 神煞
// ============================================================================

/// 十神
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug,
)]
pub enum ShiShen {
    /// 比肩
    BiJian = 0,
    /// 劫财
    JieCai = 1,
    /// 食神
    ShiShen = 2,
    /// 伤官
    ShangGuan = 3,
    /// 正财
    ZhengCai = 4,
    /// 偏财
    PianCai = 5,
    /// 正官
    ZhengGuan = 6,
    /// 偏官
    PianGuan = 7,
    /// 正印
    ZhengYin = 8,
    /// 偏印
    PianYin = 9,
}

impl ShiShen {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(ShiShen::BiJian),
            1 => Some(ShiShen::JieCai),
            2 => Some(ShiShen::ShiShen),
            3 => Some(ShiShen::ShangGuan),
            4 => Some(ShiShen::ZhengCai),
            5 => Some(ShiShen::PianCai),
            6 => Some(ShiShen::ZhengGuan),
            7 => Some(ShiShen::PianGuan),
            8 => Some(ShiShen::ZhengYin),
            9 => Some(ShiShen::PianYin),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShiShen::BiJian => "比肩",
            ShiShen::JieCai => "劫财",
            ShiShen::ShiShen => "食神",
            ShiShen::ShangGuan => "伤官",
            ShiShen::ZhengCai => "正财",
            ShiShen::PianCai => "偏财",
            ShiShen::ZhengGuan => "正官",
            ShiShen::PianGuan => "偏官",
            ShiShen::ZhengYin => "正印",
            ShiShen::PianYin => "偏印",
        }
    }
}

/// 十二运星
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug,
)]
pub enum YunXing {
    /// 长生
    ChangSheng = 0,
    /// 沐浴
    MuYu = 1,
    /// 冠带
    GuanDai = 2,
    /// 建禄
    JianLu = 3,
    /// 帝旺
    DiWang = 4,
    /// 衰
    Shuai = 5,
    /// 病
    Bing = 6,
    /// 死
    Si = 7,
    /// 墓
    Mu = 8,
    /// 绝
    Jue = 9,
    /// 胎
    Tai = 10,
    /// 养
    Yang = 11,
}

impl YunXing {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(YunXing::ChangSheng),
            1 => Some(YunXing::MuYu),
            2 => Some(YunXing::GuanDai),
            3 => Some(YunXing::JianLu),
            4 => Some(YunXing::DiWang),
            5 => Some(YunXing::Shuai),
            6 => Some(YunXing::Bing),
            7 => Some(YunXing::Si),
            8 => Some(YunXing::Mu),
            9 => Some(YunXing::Jue),
            10 => Some(YunXing::Tai),
            11 => Some(YunXing::Yang),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            YunXing::ChangSheng => "长生",
            YunXing::MuYu => "沐浴",
            YunXing::GuanDai => "冠带",
            YunXing::JianLu => "建禄",
            YunXing::DiWang => "帝旺",
            YunXing::Shuai => "衰",
            YunXing::Bing => "病",
            YunXing::Si => "死",
            YunXing::Mu => "墓",
            YunXing::Jue => "绝",
            YunXing::Tai => "胎",
            YunXing::Yang => "养",
        }
    }
}

/// 十二神煞,判别值即距三合局锚支的偏移
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug,
)]
pub enum ShenSha {
    /// 地煞
    DiSha = 0,
    /// 天煞
    TianSha = 1,
    /// 驿马
    YiMa = 2,
    /// 六害
    LiuHai = 3,
    /// 华盖
    HuaGai = 4,
    /// 劫煞
    JieSha = 5,
    /// 灾煞
    ZaiSha = 6,
    /// 天驿马
    TianYiMa = 7,
    /// 月煞
    YueSha = 8,
    /// 亡神
    WangShen = 9,
    /// 将星
    JiangXing = 10,
    /// 攀鞍
    PanAn = 11,
}

impl ShenSha {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(ShenSha::DiSha),
            1 => Some(ShenSha::TianSha),
            2 => Some(ShenSha::YiMa),
            3 => Some(ShenSha::LiuHai),
            4 => Some(ShenSha::HuaGai),
            5 => Some(ShenSha::JieSha),
            6 => Some(ShenSha::ZaiSha),
            7 => Some(ShenSha::TianYiMa),
            8 => Some(ShenSha::YueSha),
            9 => Some(ShenSha::WangShen),
            10 => Some(ShenSha::JiangXing),
            11 => Some(ShenSha::PanAn),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShenSha::DiSha => "地煞",
            ShenSha::TianSha => "天煞",
            ShenSha::YiMa => "驿马",
            ShenSha::LiuHai => "六害",
            ShenSha::HuaGai => "华盖",
            ShenSha::JieSha => "劫煞",
            ShenSha::ZaiSha => "灾煞",
            ShenSha::TianYiMa => "天驿马",
            ShenSha::YueSha => "月煞",
            ShenSha::WangShen => "亡神",
            ShenSha::JiangXing => "将星",
            ShenSha::PanAn => "攀鞍",
        }
    }
}

// ============================================================================
// 五行统计
// ============================================================================

/// 五行分布统计,下标即 `WuXing` 判别值
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug, Default,
)]
pub struct WuXingCount {
    pub counts: [u8; 5],
}

impl WuXingCount {
    /// 统计任意符号序列的五行分布
    pub fn tally(symbols: &[GanZhiSymbol]) -> Self {
        let mut counts = [0u8; 5];
        for symbol in symbols {
            counts[symbol.to_wuxing() as usize] =
                counts[symbol.to_wuxing() as usize].saturating_add(1);
        }
        WuXingCount { counts }
    }

    /// 统计完整八字的五行分布
    pub fn from_sizhu(sizhu: &SiZhu) -> Self {
        Self::tally(&sizhu.symbols())
    }

    pub fn get(&self, wuxing: WuXing) -> u8 {
        self.counts[wuxing as usize]
    }

    pub fn total(&self) -> u8 {
        self.counts
            .iter()
            .fold(0u8, |acc, c| acc.saturating_add(*c))
    }

    /// 最旺之行,计数相同时按 木火土金水 取先者
    pub fn dominant(&self) -> WuXing {
        let mut best = 0usize;
        for i in 1..5 {
            if self.counts[i] > self.counts[best] {
                best = i;
            }
        }
        WuXing::from_index(best as u8).unwrap_or(WuXing::Mu)
    }

    /// 最弱之行,计数相同时按 木火土金水 取先者
    pub fn weakest(&self) -> WuXing {
        let mut worst = 0usize;
        for i in 1..5 {
            if self.counts[i] < self.counts[worst] {
                worst = i;
            }
        }
        WuXing::from_index(worst as u8).unwrap_or(WuXing::Mu)
    }
}

// ============================================================================
// 解盘明细
// ============================================================================

/// 藏干及其相对日主的十神
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug,
)]
pub struct CangGanShiShen {
    pub gan: TianGan,
    pub shi_shen: ShiShen,
}

/// 单柱解盘明细
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug,
)]
pub struct ZhuDetail {
    pub ganzhi: GanZhi,
    pub gan_wuxing: WuXing,
    pub zhi_wuxing: WuXing,
    /// 柱干相对日主的十神
    pub shi_shen: ShiShen,
    /// 支中藏干的十神,空位为 `None`
    pub canggan: [Option<CangGanShiShen>; 3],
    pub yun_xing: YunXing,
    pub shen_sha: ShenSha,
}

/// 四柱解盘明细
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug,
)]
pub struct SiZhuDetail {
    pub year: ZhuDetail,
    pub month: ZhuDetail,
    pub day: ZhuDetail,
    pub hour: ZhuDetail,
}

// ============================================================================
// 合婚评分
// ============================================================================

/// 合婚评分明细
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug, Default,
)]
pub struct HeHunScore {
    /// 五行互补分(每行 +2 / +1 / -1,合计 [-5, 10])
    pub wuxing_synergy: i8,
    /// 干支关系分(4x4 干对加 4x4 支对)
    pub ganzhi_relation: i16,
    /// 双向配偶星合计(每向封顶 3)
    pub spouse_star: u8,
    /// 总分 [0, 100]
    pub overall: u8,
}

/// 合婚请求状态
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug, Default,
)]
pub enum MatchStatus {
    /// 待授权
    #[default]
    PendingAuthorization = 0,
    /// 已授权
    Authorized = 1,
    /// 已完成
    Completed = 2,
    /// 已取消
    Cancelled = 3,
    /// 已拒绝
    Rejected = 4,
}

/// 匹配建议
#[derive(
    Clone, Copy, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen, PartialEq, Eq,
    Debug, Default,
)]
pub enum MatchRecommendation {
    /// 天作之合(90-100分)
    PerfectMatch = 0,
    /// 良缘佳配(75-89分)
    GoodMatch = 1,
    /// 中等缘分(60-74分)
    #[default]
    AverageMatch = 2,
    /// 需要磨合(40-59分)
    NeedsWork = 3,
    /// 不建议(0-39分)
    NotRecommended = 4,
}

impl MatchRecommendation {
    /// 根据评分获取建议
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=100 => Self::PerfectMatch,
            75..=89 => Self::GoodMatch,
            60..=74 => Self::AverageMatch,
            40..=59 => Self::NeedsWork,
            _ => Self::NotRecommended,
        }
    }
}

// ============================================================================
// 错误
// ============================================================================

/// 排盘错误
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaiPanError {
    /// 天干序号越界
    InvalidGanIndex,
    /// 地支序号越界
    InvalidZhiIndex,
    /// 时辰越界(须在 0-23)
    InvalidHour,
    /// 干支奇偶不一致,非六十甲子组合
    ParityMismatch,
}
