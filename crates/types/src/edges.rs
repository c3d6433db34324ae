//! Edge thicknesses for margin and padding.
use serde::{de, Deserialize, Deserializer, Serialize};
use std::ops::Add;

/// Four non-negative edge thicknesses, used for both margin and padding.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeSizes {
    pub top: i32,
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
}

impl EdgeSizes {
    /// Edges in CSS order: top, right, bottom, left.
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    pub fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn x(value: i32) -> Self {
        Self::new(0, value, 0, value)
    }

    pub fn y(value: i32) -> Self {
        Self::new(value, 0, value, 0)
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Left plus right.
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Top plus bottom.
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }

    fn parse_length(input: &str) -> Result<i32, String> {
        let value = input
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("Invalid edge size '{}': {}", input, e))?;
        if value < 0 {
            return Err(format!("Edge sizes must be non-negative, got {}", value));
        }
        Ok(value)
    }

    /// Parse CSS-style shorthand (1, 2, or 4 values).
    fn parse_shorthand(input: &str) -> Result<Self, String> {
        let values = input
            .split_whitespace()
            .map(Self::parse_length)
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [all] => Ok(EdgeSizes::all(*all)),
            [vertical, horizontal] => Ok(EdgeSizes::new(*vertical, *horizontal, *vertical, *horizontal)),
            [top, right, bottom, left] => Ok(EdgeSizes::new(*top, *right, *bottom, *left)),
            _ => Err(format!(
                "Invalid edge shorthand: expected 1, 2, or 4 values, got {}",
                values.len()
            )),
        }
    }
}

impl Add for EdgeSizes {
    type Output = EdgeSizes;

    fn add(self, rhs: EdgeSizes) -> EdgeSizes {
        EdgeSizes {
            top: self.top + rhs.top,
            left: self.left + rhs.left,
            right: self.right + rhs.right,
            bottom: self.bottom + rhs.bottom,
        }
    }
}

impl<'de> Deserialize<'de> for EdgeSizes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EdgeSizesVisitor;
        impl<'de> de::Visitor<'de> for EdgeSizesVisitor {
            type Value = EdgeSizes;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an integer, a string like '10' or '10 20', or a map")
            }

            fn visit_u64<E>(self, value: u64) -> Result<EdgeSizes, E>
            where
                E: de::Error,
            {
                i32::try_from(value).map(EdgeSizes::all).map_err(E::custom)
            }

            fn visit_i64<E>(self, value: i64) -> Result<EdgeSizes, E>
            where
                E: de::Error,
            {
                if value < 0 {
                    return Err(E::custom("edge sizes must be non-negative"));
                }
                i32::try_from(value).map(EdgeSizes::all).map_err(E::custom)
            }

            fn visit_str<E>(self, value: &str) -> Result<EdgeSizes, E>
            where
                E: de::Error,
            {
                EdgeSizes::parse_shorthand(value).map_err(E::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<EdgeSizes, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut edges = EdgeSizes::default();
                while let Some(key) = map.next_key::<String>()? {
                    let value: i32 = map.next_value()?;
                    if value < 0 {
                        return Err(de::Error::custom("edge sizes must be non-negative"));
                    }
                    match key.as_str() {
                        "top" => edges.top = value,
                        "left" => edges.left = value,
                        "right" => edges.right = value,
                        "bottom" => edges.bottom = value,
                        _ => { /* ignore unknown fields */ }
                    }
                }
                Ok(edges)
            }
        }
        deserializer.deserialize_any(EdgeSizesVisitor)
    }
}
