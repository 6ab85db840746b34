use std::fmt;
use std::str::FromStr;

/// Card colors. `Wild` only appears on unplayed wild cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Wild,
}

impl Color {
    /// The four concrete colors, in tie-break order.
    pub const PLAYABLE: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Color given to a wild card when nobody gets to choose one.
    pub const DEFAULT: Color = Color::Red;

    pub const fn is_wild(self) -> bool {
        matches!(self, Color::Wild)
    }

    pub const fn to_char(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Yellow => 'y',
            Color::Wild => 'w',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Wild => "Wild",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColorParseError {
    #[error("invalid color: '{0}'")]
    Invalid(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Color::Red),
            "g" | "green" => Ok(Color::Green),
            "b" | "blue" => Ok(Color::Blue),
            "y" | "yellow" => Ok(Color::Yellow),
            "w" | "wild" => Ok(Color::Wild),
            _ => Err(ColorParseError::Invalid(s.to_string())),
        }
    }
}

/// Card faces: numbers, the three action faces and the two wild faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Value {
    Zero = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl Value {
    pub const NUMBERS: [Value; 10] = [
        Value::Zero,
        Value::One,
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
    ];

    pub const ACTIONS: [Value; 3] = [Value::Skip, Value::Reverse, Value::DrawTwo];

    pub const WILDS: [Value; 2] = [Value::Wild, Value::WildDrawFour];

    pub const fn is_wild(self) -> bool {
        matches!(self, Value::Wild | Value::WildDrawFour)
    }

    /// Short code used by `Card::code` and the scripted driver.
    pub fn code(self) -> String {
        match self {
            Value::Skip => "s".to_string(),
            Value::Reverse => "r".to_string(),
            Value::DrawTwo => "+2".to_string(),
            Value::Wild => String::new(),
            Value::WildDrawFour => "+4".to_string(),
            n => (n as u8).to_string(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Value::Zero => "0",
            Value::One => "1",
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Skip => "Skip",
            Value::Reverse => "Reverse",
            Value::DrawTwo => "Draw Two",
            Value::Wild => "Wild",
            Value::WildDrawFour => "Wild Draw Four",
        }
    }

    fn from_number(n: u8) -> Option<Value> {
        Value::NUMBERS.get(usize::from(n)).copied()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("{0} is not a wild card")]
    NotWild(Card),
    #[error("wild card already bound to {0}")]
    AlreadyBound(Color),
    #[error("a wild card must be given a concrete color")]
    WildColor,
}

/// A single UNO card.
///
/// Cards move between the deck, hands and the discard slot; the engine never
/// duplicates one. The only mutation is binding a played wild card to a color.
///
/// ```
/// use uno_rs::cards::{Card, Color, Value};
///
/// let card = Card::new(Color::Red, Value::Seven);
/// assert_eq!(card.to_string(), "Red 7");
/// assert_eq!(card.code(), "r7");
///
/// let wild = Card::wild(Value::Wild).bind_color(Color::Blue).unwrap();
/// assert_eq!(wild.color(), Color::Blue);
/// assert!(wild.is_wild());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    color: Color,
    value: Value,
}

impl Card {
    /// A colored card. Use [`Card::wild`] for wild faces.
    pub const fn new(color: Color, value: Value) -> Self {
        Self { color, value }
    }

    /// An unplayed wild card (`color == Wild`).
    pub const fn wild(value: Value) -> Self {
        Self { color: Color::Wild, value }
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn value(&self) -> Value {
        self.value
    }

    /// True for wild faces, whether or not a color has been bound yet.
    pub const fn is_wild(&self) -> bool {
        self.value.is_wild()
    }

    /// Bind a wild card to a concrete color. Consumes the card so it can only
    /// happen once per move.
    pub fn bind_color(self, color: Color) -> Result<Card, CardError> {
        if !self.is_wild() {
            return Err(CardError::NotWild(self));
        }
        if !self.color.is_wild() {
            return Err(CardError::AlreadyBound(self.color));
        }
        if color.is_wild() {
            return Err(CardError::WildColor);
        }
        Ok(Card { color, value: self.value })
    }

    /// Compact code, e.g. `r7`, `gs`, `b+2`, `w`, `w+4`.
    pub fn code(&self) -> String {
        if self.is_wild() {
            format!("{}{}", Color::Wild.to_char(), self.value.code())
        } else {
            format!("{}{}", self.color.to_char(), self.value.code())
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wild() {
            if self.color.is_wild() {
                write!(f, "{}", self.value)
            } else {
                write!(f, "{} ({})", self.value, self.color)
            }
        } else {
            write!(f, "{} {}", self.color, self.value)
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardParseError {
    #[error("invalid card: '{0}'")]
    Invalid(String),
    #[error(transparent)]
    Color(#[from] ColorParseError),
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        let mut chars = t.chars();
        let Some(first) = chars.next() else {
            return Err(CardParseError::Invalid(s.to_string()));
        };
        let color = Color::try_from(first)?;
        let rest = chars.as_str();
        if color.is_wild() {
            return match rest {
                "" => Ok(Card::wild(Value::Wild)),
                "+4" => Ok(Card::wild(Value::WildDrawFour)),
                _ => Err(CardParseError::Invalid(s.to_string())),
            };
        }
        let value = match rest {
            "s" => Value::Skip,
            "r" => Value::Reverse,
            "+2" => Value::DrawTwo,
            digits => digits
                .parse::<u8>()
                .ok()
                .and_then(Value::from_number)
                .ok_or_else(|| CardParseError::Invalid(s.to_string()))?,
        };
        Ok(Card::new(color, value))
    }
}

impl TryFrom<char> for Color {
    type Error = ColorParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'r' => Ok(Color::Red),
            'g' => Ok(Color::Green),
            'b' => Ok(Color::Blue),
            'y' => Ok(Color::Yellow),
            'w' => Ok(Color::Wild),
            _ => Err(ColorParseError::Invalid(c.to_string())),
        }
    }
}

/// Parse multiple card codes separated by whitespace or commas.
///
/// ```
/// use uno_rs::cards::{parse_cards, Card, Color, Value};
///
/// let cards = parse_cards("r5, g+2 w+4").unwrap();
/// assert_eq!(cards[0], Card::new(Color::Red, Value::Five));
/// assert_eq!(cards[1], Card::new(Color::Green, Value::DrawTwo));
/// assert_eq!(cards[2], Card::wild(Value::WildDrawFour));
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, CardParseError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(Card::from_str)
        .collect()
}
