//! `serde` support for [`BiMap`]
//!
//! A map is written as a sequence of `[key, value]` pairs in insertion order,
//! which keeps the order and works for keys that are not strings.

use std::{fmt, hash::Hash, marker::PhantomData};

use serde::{
    de::{Error as _, SeqAccess, Visitor},
    ser::SerializeSeq,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{orientation::Orientation, BiMap};

/// Upper bound on pre-allocation driven by untrusted size hints
const MAX_PREALLOCATED_ENTRIES: usize = 4096;

impl<L, R, O> Serialize for BiMap<L, R, O>
where
    O: Orientation<L, R>,
    O::Key: Serialize,
    O::Value: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for pair in self {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }
}

struct BiMapVisitor<L, R> {
    marker: PhantomData<fn() -> BiMap<L, R>>,
}

impl<'de, L, R> Visitor<'de> for BiMapVisitor<L, R>
where
    L: Deserialize<'de> + Eq + Hash + Clone,
    R: Deserialize<'de> + Eq + Hash + Clone,
{
    type Value = BiMap<L, R>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of [key, value] pairs with unique values")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED_ENTRIES);
        let mut map = BiMap::with_capacity(capacity);
        while let Some((key, value)) = seq.next_element::<(L, R)>()? {
            map.set(key, value).map_err(A::Error::custom)?;
        }
        Ok(map)
    }
}

impl<'de, L, R> Deserialize<'de> for BiMap<L, R>
where
    L: Deserialize<'de> + Eq + Hash + Clone,
    R: Deserialize<'de> + Eq + Hash + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(BiMapVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{BiMap, SetOptions};

    #[test]
    fn test_serialize_in_insertion_order() {
        let mut map = BiMap::new();
        map.set("b", 2).unwrap();
        map.set("a", 1).unwrap();
        map.set_with("c", 2, SetOptions::forced()).unwrap();

        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"[["c",2],["a",1]]"#
        );
        assert_eq!(
            serde_json::to_string(map.inverse()).unwrap(),
            r#"[[2,"c"],[1,"a"]]"#
        );
    }

    #[test]
    fn test_deserialize() {
        let map: BiMap<String, u32> = serde_json::from_str(r#"[["x",1],["y",2]]"#).unwrap();
        assert_eq!(map.get("x"), Some(&1));
        assert_eq!(map.inverse().get(&2).map(String::as_str), Some("y"));
        assert_eq!(map.keys().cloned().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_values() {
        let error = serde_json::from_str::<BiMap<String, u32>>(r#"[["x",1],["y",1]]"#)
            .unwrap_err()
            .to_string();
        assert!(error.contains("Value already bound to another key"));
    }
}
