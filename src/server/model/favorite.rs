use std::{fmt, str::FromStr};

/// Kind of row a favorite can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Planet,
    Character,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planet => write!(f, "planet"),
            Self::Character => write!(f, "character"),
        }
    }
}

/// The planet or character a user favorites, identified by its primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    Character(i32),
}

impl FavoriteTarget {
    pub fn id(self) -> i32 {
        match self {
            Self::Planet(id) | Self::Character(id) => id,
        }
    }

    pub fn kind(self) -> TargetKind {
        match self {
            Self::Planet(_) => TargetKind::Planet,
            Self::Character(_) => TargetKind::Character,
        }
    }
}

/// How an existing (user, target) pairing is detected.
///
/// - `Exact` looks for a row with both the user ID and the target ID.
/// - `Legacy` reproduces the old service: a pairing is assumed to exist when the user has
///   any favorite at all and the target is favorited by anyone at all. Removing a pairing
///   only fails when both of those lookups are empty, and reports success even if no exact
///   row was deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FavoriteMatching {
    #[default]
    Exact,
    Legacy,
}

impl FromStr for FavoriteMatching {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "legacy" => Ok(Self::Legacy),
            other => Err(format!("expected `exact` or `legacy`, got `{}`", other)),
        }
    }
}

/// What happens to favorites when the planet or character they point at is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetDeletePolicy {
    /// Favorites keep the now dangling target ID
    #[default]
    Orphan,
    /// Favorites pointing at the target are deleted with it
    Cascade,
    /// The target cannot be deleted while any favorite points at it
    Restrict,
}

impl FromStr for TargetDeletePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "orphan" => Ok(Self::Orphan),
            "cascade" => Ok(Self::Cascade),
            "restrict" => Ok(Self::Restrict),
            other => Err(format!(
                "expected `orphan`, `cascade`, or `restrict`, got `{}`",
                other
            )),
        }
    }
}

/// Favorite behavior configured at startup and shared through [`AppState`](super::app::AppState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FavoritePolicy {
    pub matching: FavoriteMatching,
    pub on_target_delete: TargetDeletePolicy,
}
