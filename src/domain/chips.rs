use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Сколько единиц хранения в одной фишке: суммы считаются в сотых.
pub const CHIP_SCALE: u64 = 100;

/// Количество фишек в сотых долях: `Chips(25)` – это 0.25.
///
/// Со столов с блайндами 0.25/0.50 суммы приходят дробными, поэтому
/// наружу (JSON, текст) значение идёт обычным числом, а внутри остаётся
/// целым и складывается без ошибок округления.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Chips(pub u64);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    /// Целое число фишек.
    pub const fn whole(amount: u64) -> Self {
        Chips(amount.saturating_mul(CHIP_SCALE))
    }

    /// Десятичная сумма, округлённая до сотых. `None` для отрицательных,
    /// бесконечных и слишком больших значений.
    pub fn from_decimal(amount: f64) -> Option<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        let scaled = (amount * CHIP_SCALE as f64).round();
        if scaled >= u64::MAX as f64 {
            return None;
        }
        Some(Chips(scaled as u64))
    }

    pub fn to_decimal(self) -> f64 {
        self.0 as f64 / CHIP_SCALE as f64
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_whole(self) -> bool {
        self.0 % CHIP_SCALE == 0
    }

    /// Знаковая разница `self - other` в единицах хранения.
    /// На краях диапазона насыщается, а не переполняется.
    pub fn signed_diff(self, other: Chips) -> i64 {
        let diff = i128::from(self.0) - i128::from(other.0);
        i64::try_from(diff).unwrap_or(if diff < 0 { i64::MIN } else { i64::MAX })
    }
}

/// `12`, `0.25`, `10.5` – без хвостовых нулей.
impl fmt::Display for Chips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / CHIP_SCALE;
        let cents = self.0 % CHIP_SCALE;
        if cents == 0 {
            write!(f, "{whole}")
        } else if cents % 10 == 0 {
            write!(f, "{whole}.{}", cents / 10)
        } else {
            write!(f, "{whole}.{cents:02}")
        }
    }
}

impl Serialize for Chips {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_whole() {
            serializer.serialize_u64(self.0 / CHIP_SCALE)
        } else {
            serializer.serialize_f64(self.to_decimal())
        }
    }
}

struct ChipsVisitor;

impl<'de> Visitor<'de> for ChipsVisitor {
    type Value = Chips;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative number of chips")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Chips, E> {
        v.checked_mul(CHIP_SCALE)
            .map(Chips)
            .ok_or_else(|| E::custom(format!("chip amount {v} is too large")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Chips, E> {
        let v = u64::try_from(v).map_err(|_| E::custom(format!("negative chip amount {v}")))?;
        self.visit_u64(v)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Chips, E> {
        Chips::from_decimal(v).ok_or_else(|| E::custom(format!("invalid chip amount {v}")))
    }
}

impl<'de> Deserialize<'de> for Chips {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ChipsVisitor)
    }
}

impl Add for Chips {
    type Output = Chips;

    fn add(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

/// Вычитание не уходит ниже нуля.
impl Sub for Chips {
    type Output = Chips;

    fn sub(self, rhs: Chips) -> Self::Output {
        Chips(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Chips) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, |acc, c| acc + c)
    }
}
