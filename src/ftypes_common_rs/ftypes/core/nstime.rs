use std::cmp::Ordering;

/// 秒とナノ秒の組で表す時刻・時間
///
/// 相対時間では両フィールドが独立に負になり得る（負の時間長）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NsTime {
    pub secs: i64,
    pub nsecs: i32,
}

pub const NSECS_PER_SEC: i32 = 1_000_000_000;

impl NsTime {
    pub const fn new(secs: i64, nsecs: i32) -> Self {
        Self { secs, nsecs }
    }

    /// ナノ秒を 0 以上 NSECS_PER_SEC 未満に繰り上げ・繰り下げした値
    pub fn normalized(&self) -> Self {
        let carry = self.nsecs.div_euclid(NSECS_PER_SEC);
        Self {
            secs: self.secs.saturating_add(i64::from(carry)),
            nsecs: self.nsecs.rem_euclid(NSECS_PER_SEC),
        }
    }

    pub fn is_negative(&self) -> bool {
        self.secs < 0 || self.nsecs < 0
    }
}

impl PartialOrd for NsTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// (secs, nsecs) の辞書式順序
impl Ord for NsTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.secs
            .cmp(&other.secs)
            .then_with(|| self.nsecs.cmp(&other.nsecs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_order() {
        assert!(NsTime::new(1, 0) > NsTime::new(0, 999_999_999));
        assert!(NsTime::new(1, 5) < NsTime::new(1, 6));
        assert_eq!(NsTime::new(3, 3).cmp(&NsTime::new(3, 3)), Ordering::Equal);
        assert!(NsTime::new(0, -1) < NsTime::new(0, 0));
    }

    #[test]
    fn test_negative() {
        assert!(NsTime::new(0, -1).is_negative());
        assert!(NsTime::new(-2, 0).is_negative());
        assert!(!NsTime::default().is_negative());
    }

    #[test]
    fn test_normalized() {
        assert_eq!(NsTime::new(0, -5).normalized(), NsTime::new(-1, 999_999_995));
        assert_eq!(NsTime::new(2, 1_500_000_000).normalized(), NsTime::new(3, 500_000_000));
        assert_eq!(NsTime::new(7, 1).normalized(), NsTime::new(7, 1));
    }
}
