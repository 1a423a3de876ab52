use std::fmt;
use std::str::FromStr;

/// The strategy used to derive aliases from a base address.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AliasMethod {
    /// `local+tag@domain` with a caller supplied tag.
    #[default]
    Plus,
    /// Randomized dot insertion into the local part.
    Dot,
    /// `local+xxxxxx@domain` with a random base-36 tag.
    Random,
}

/// The methods that can produce more than one alias per request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BulkMethod {
    Dot,
    Random,
}

impl AliasMethod {
    /// Returns the bulk flavour of this method, if it has one.
    pub fn bulk(self) -> Option<BulkMethod> {
        match self {
            AliasMethod::Plus => None,
            AliasMethod::Dot => Some(BulkMethod::Dot),
            AliasMethod::Random => Some(BulkMethod::Random),
        }
    }
}

impl From<BulkMethod> for AliasMethod {
    fn from(method: BulkMethod) -> Self {
        match method {
            BulkMethod::Dot => AliasMethod::Dot,
            BulkMethod::Random => AliasMethod::Random,
        }
    }
}

impl FromStr for AliasMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plus" => Ok(AliasMethod::Plus),
            "dot" => Ok(AliasMethod::Dot),
            "random" => Ok(AliasMethod::Random),
            _ => Err(format!("invalid method: {s} (expected plus, dot or random)")),
        }
    }
}

impl fmt::Display for AliasMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AliasMethod::Plus => "plus",
            AliasMethod::Dot => "dot",
            AliasMethod::Random => "random",
        };
        f.write_str(name)
    }
}
