//! Chinese names for lunar dates: months, days, sexagenary years and zodiac
//! animals.

/// Month names without the leap prefix, 正月 to 腊月.
const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

/// Day names, 初一 to 三十.
const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一", "十二",
    "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二", "廿三", "廿四",
    "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const ZODIAC: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// Name of lunar month `month`.  The eleventh and twelfth months are
/// 冬月 and 腊月; a leap month gets the 闰 prefix.
///
/// Returns `None` if `month` is not in `1..=12`.
///
/// # Examples
///
/// ```
/// use lb_time::lunar::fmt;
///
/// assert_eq!(Some("冬月".to_owned()), fmt::month(11, false));
/// assert_eq!(Some("闰六月".to_owned()), fmt::month(6, true));
/// assert_eq!(None, fmt::month(13, false));
/// ```
pub fn month(month: u8, leap: bool) -> Option<String> {
    let name = MONTH_NAMES.get(usize::from(month).checked_sub(1)?)?;
    Some(if leap {
        format!("闰{name}")
    } else {
        (*name).to_owned()
    })
}

/// Name of lunar day `day`: 初一 to 初十 for the first ten days, 廿一 to
/// 廿九 for days 21 to 29.
///
/// # Examples
///
/// ```
/// use lb_time::lunar::fmt;
///
/// assert_eq!(Some("初十"), fmt::day(10));
/// assert_eq!(Some("廿五"), fmt::day(25));
/// assert_eq!(Some("三十"), fmt::day(30));
/// assert_eq!(None, fmt::day(31));
/// ```
pub fn day(day: u8) -> Option<&'static str> {
    DAY_NAMES.get(usize::from(day).checked_sub(1)?).copied()
}

/// Stem-branch name of a lunar year, e.g. 甲辰 for 2024.
///
/// # Examples
///
/// ```
/// use lb_time::lunar::fmt;
///
/// assert_eq!("甲辰", fmt::sexagenary_year(2024));
/// assert_eq!("庚子", fmt::sexagenary_year(1900));
/// ```
pub fn sexagenary_year(year: i32) -> String {
    let stem = STEMS[(year - 4).rem_euclid(10) as usize];
    let branch = BRANCHES[(year - 4).rem_euclid(12) as usize];
    format!("{stem}{branch}")
}

/// Zodiac animal of a lunar year.
///
/// # Examples
///
/// ```
/// use lb_time::lunar::fmt;
///
/// assert_eq!("龙", fmt::zodiac(2024));
/// assert_eq!("马", fmt::zodiac(1990));
/// ```
pub fn zodiac(year: i32) -> &'static str {
    ZODIAC[(year - 4).rem_euclid(12) as usize]
}
