//! Payment card number checks.

use crate::builder::RuleError;
use crate::core::{ValidationError, ValidationRule};

/// Card networks recognised by [`PaymentCardRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardType {
    Amex,
    Visa,
    Mastercard,
    Discover,
    DinersClub,
    Jcb,
    UnionPay,
    Maestro,
}

impl CardType {
    /// Every supported network.
    pub const ALL: [CardType; 8] = [
        Self::Amex,
        Self::Visa,
        Self::Mastercard,
        Self::Discover,
        Self::DinersClub,
        Self::Jcb,
        Self::UnionPay,
        Self::Maestro,
    ];

    /// Inclusive ranges of leading digits issued by the network.
    fn prefixes(self) -> &'static [(u32, u32)] {
        match self {
            Self::Amex => &[(34, 34), (37, 37)],
            Self::Visa => &[(4, 4)],
            Self::Mastercard => &[(51, 55), (2221, 2720)],
            Self::Discover => &[(6011, 6011), (644, 649), (65, 65), (622126, 622925)],
            Self::DinersClub => &[(300, 305), (36, 36), (38, 39)],
            Self::Jcb => &[(3528, 3589)],
            Self::UnionPay => &[(62, 62)],
            Self::Maestro => &[
                (5018, 5018),
                (5020, 5020),
                (5038, 5038),
                (5893, 5893),
                (6304, 6304),
                (6759, 6759),
                (6761, 6763),
            ],
        }
    }

    fn lengths(self) -> &'static [usize] {
        match self {
            Self::Amex => &[15],
            Self::Visa => &[13, 16, 19],
            Self::Mastercard => &[16],
            Self::Discover => &[16, 19],
            Self::DinersClub => &[14, 16, 19],
            Self::Jcb | Self::UnionPay => &[16, 17, 18, 19],
            Self::Maestro => &[12, 13, 14, 15, 16, 17, 18, 19],
        }
    }

    /// Whether a digits-only card number has this network's prefix and length.
    pub fn matches(self, digits: &str) -> bool {
        self.lengths().contains(&digits.len())
            && self.prefixes().iter().any(|&(low, high)| {
                let width = low.checked_ilog10().map_or(1, |log| log as usize + 1);
                digits
                    .get(..width)
                    .and_then(|prefix| prefix.parse::<u32>().ok())
                    .is_some_and(|prefix| (low..=high).contains(&prefix))
            })
    }
}

/// Luhn checksum over a digits-only string.
fn luhn(digits: &str) -> bool {
    let sum: u32 = digits
        .bytes()
        .rev()
        .enumerate()
        .map(|(position, byte)| {
            let digit = u32::from(byte - b'0');
            if position % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    sum % 10 == 0
}

/// Passes when the input is a plausible card number of an accepted network.
///
/// Spaces and dashes are ignored. The remaining characters must all be
/// digits, pass the Luhn checksum, and match the prefix and length of at
/// least one accepted [`CardType`]. Missing input fails.
///
/// # Example
///
/// ```rust
/// use validity::rules::{CardType, PaymentCardRule};
/// use validity::{ValidationError, Validator};
///
/// let rule = PaymentCardRule::new([CardType::Visa], ValidationError::new("Visa only")).unwrap();
///
/// assert!(Validator::validate(Some("4111 1111 1111 1111"), &rule).is_valid());
/// assert!(!Validator::validate(Some("5555 5555 5555 4444"), &rule).is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentCardRule<E = ValidationError> {
    accepted: Vec<CardType>,
    error: E,
}

impl<E> PaymentCardRule<E> {
    /// Accept only the given networks. Fails when none are given.
    pub fn new<I>(accepted: I, error: E) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = CardType>,
    {
        let accepted: Vec<CardType> = accepted.into_iter().collect();
        if accepted.is_empty() {
            return Err(RuleError::EmptyCardTypes);
        }

        Ok(Self { accepted, error })
    }

    /// Accept every known network.
    pub fn any(error: E) -> Self {
        Self {
            accepted: CardType::ALL.to_vec(),
            error,
        }
    }

    /// The networks this rule accepts.
    pub fn accepted(&self) -> &[CardType] {
        &self.accepted
    }
}

impl<U, E> ValidationRule<U> for PaymentCardRule<E>
where
    U: AsRef<str> + ?Sized,
    E: Clone,
{
    type Error = E;

    fn validate(&self, input: Option<&U>) -> bool {
        let Some(input) = input else {
            return false;
        };
        let digits: String = input
            .as_ref()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-'))
            .collect();

        !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && luhn(&digits)
            && self.accepted.iter().any(|card| card.matches(&digits))
    }

    fn error(&self) -> &E {
        &self.error
    }
}
