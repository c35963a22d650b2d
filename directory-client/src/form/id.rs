use shared::util::{now_millis, snowflake_id};

/// How the form synthesizes the business id of a new employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdScheme {
    /// `EMP` + last six digits of the Unix-millisecond clock.
    ///
    /// Repeats every 1000 seconds, so two submissions can collide; the API
    /// answers the second one with 409.
    #[default]
    Timestamp,
    /// `EMP` + a 53-bit snowflake (41-bit clock, 12 random bits)
    Snowflake,
}

impl IdScheme {
    pub fn generate(&self) -> String {
        match self {
            IdScheme::Timestamp => format!("EMP{:06}", now_millis().rem_euclid(1_000_000)),
            IdScheme::Snowflake => format!("EMP{}", snowflake_id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_id_shape() {
        let id = IdScheme::Timestamp.generate();
        assert!(id.starts_with("EMP"));
        assert_eq!(id.len(), 9);
        assert!(id[3..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_snowflake_id_shape() {
        let id = IdScheme::Snowflake.generate();
        assert!(id.starts_with("EMP"));
        let n: i64 = id[3..].parse().unwrap();
        assert!(n > 0);
    }

    #[test]
    fn test_default_is_timestamp() {
        assert_eq!(IdScheme::default(), IdScheme::Timestamp);
    }
}
