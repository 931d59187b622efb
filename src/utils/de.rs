use serde::{de, Deserializer};

struct MovieIdVisitor;

impl<'de> de::Visitor<'de> for MovieIdVisitor {
    type Value = i32;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a movie id as a number or a numeric string")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i32::try_from(v).map_err(|_| de::Error::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        i32::try_from(v).map_err(|_| de::Error::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        v.trim()
            .parse()
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(v), &self))
    }
}

/// Movie ids arrive as JSON numbers from some clients and as strings from
/// others.
pub fn deserialize_movie_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(MovieIdVisitor)
}
