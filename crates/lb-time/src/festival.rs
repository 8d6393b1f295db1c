//! Public holidays and traditional festivals observed in mainland China.

use serde::{Deserialize, Serialize};

/// A named holiday or festival.
///
/// [`Festival::name`] is the label shown in calendar cells;
/// [`Festival::key`] is a stable identifier for translation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Festival {
    /// 元旦, January 1.
    NewYearsDay,
    /// 除夕, the last day of the lunar year.
    SpringFestivalEve,
    /// 春节, lunar new year.
    SpringFestival,
    /// 元宵节, lunar 1/15.
    LanternFestival,
    /// 清明节, a solar term around April 4–5.
    QingmingFestival,
    /// 劳动节, May 1.
    LabourDay,
    /// 儿童节, June 1.
    ChildrensDay,
    /// 端午节, lunar 5/5.
    DragonBoatFestival,
    /// 中秋节, lunar 8/15.
    MidAutumnFestival,
    /// 国庆节, October 1.
    NationalDay,
    /// A single official break covering both National Day and Mid-Autumn.
    NationalDayAndMidAutumn,
    /// 重阳节, lunar 9/9.
    DoubleNinthFestival,
}

impl Festival {
    /// Every festival, in calendar order.
    pub const ALL: [Festival; 12] = [
        Festival::NewYearsDay,
        Festival::SpringFestivalEve,
        Festival::SpringFestival,
        Festival::LanternFestival,
        Festival::QingmingFestival,
        Festival::LabourDay,
        Festival::ChildrensDay,
        Festival::DragonBoatFestival,
        Festival::MidAutumnFestival,
        Festival::NationalDay,
        Festival::NationalDayAndMidAutumn,
        Festival::DoubleNinthFestival,
    ];

    /// Chinese display label.
    pub fn name(&self) -> &'static str {
        match self {
            Festival::NewYearsDay => "元旦",
            Festival::SpringFestivalEve => "除夕",
            Festival::SpringFestival => "春节",
            Festival::LanternFestival => "元宵节",
            Festival::QingmingFestival => "清明节",
            Festival::LabourDay => "劳动节",
            Festival::ChildrensDay => "儿童节",
            Festival::DragonBoatFestival => "端午节",
            Festival::MidAutumnFestival => "中秋节",
            Festival::NationalDay => "国庆节",
            Festival::NationalDayAndMidAutumn => "国庆中秋",
            Festival::DoubleNinthFestival => "重阳节",
        }
    }

    /// Stable camelCase identifier, identical to the serialized form.
    pub fn key(&self) -> &'static str {
        match self {
            Festival::NewYearsDay => "newYearsDay",
            Festival::SpringFestivalEve => "springFestivalEve",
            Festival::SpringFestival => "springFestival",
            Festival::LanternFestival => "lanternFestival",
            Festival::QingmingFestival => "qingmingFestival",
            Festival::LabourDay => "labourDay",
            Festival::ChildrensDay => "childrensDay",
            Festival::DragonBoatFestival => "dragonBoatFestival",
            Festival::MidAutumnFestival => "midAutumnFestival",
            Festival::NationalDay => "nationalDay",
            Festival::NationalDayAndMidAutumn => "nationalDayAndMidAutumn",
            Festival::DoubleNinthFestival => "doubleNinthFestival",
        }
    }
}

impl std::fmt::Display for Festival {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
