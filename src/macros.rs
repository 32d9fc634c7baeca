//! Macros to reduce boilerplate in the codebase

/// Generate `Display` and a case-insensitive `FromStr` for a fieldless enum.
///
/// The label is used verbatim for display; parsing accepts any casing of it.
///
/// ```rust,ignore
/// enum_display_fromstr!(
///     SortKey,
///     NexEventError::InvalidSortKey,
///     {
///         DateAsc => "date-asc",
///         PriceAsc => "price-asc",
///     }
/// );
/// ```
#[macro_export]
macro_rules! enum_display_fromstr {
    (
        $enum_name:ident,
        $error_variant:path,
        { $($variant:ident => $str:expr),+ $(,)? }
    ) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($enum_name::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::error::NexEventError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok($enum_name::$variant);
                    }
                )+
                Err($error_variant(s.to_string()))
            }
        }
    };
}
