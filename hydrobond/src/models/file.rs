use serde::{Deserialize, Serialize};

/// One rendition of an uploaded file (a size or format of an image).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileVariant {
    pub id: u64,

    /// Relative quality rank among the variants of the same file; higher is
    /// better
    pub score: i64,

    /// File extension without the dot (`webp`, `png`)
    pub extension: String,

    /// Media category, e.g. `image`
    #[serde(rename = "type")]
    pub kind: String,

    /// Size in bytes
    pub size: u64,

    pub url: String,

    pub mime: String,
}

/// Uploaded media asset with its rendered variants.
///
/// Variants keep the order the server returned them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub variants: Vec<FileVariant>,
}

impl File {
    /// Variant with the highest score. On a tie the first one listed wins.
    pub fn best_variant(&self) -> Option<&FileVariant> {
        self.variants
            .iter()
            .reduce(|best, variant| if variant.score > best.score { variant } else { best })
    }

    /// Variants of a media category, in server order.
    pub fn variants_of_type<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a FileVariant> {
        self.variants.iter().filter(move |variant| variant.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::AVATAR_JSON;

    fn variant(id: u64, score: i64, kind: &str) -> FileVariant {
        FileVariant {
            id,
            score,
            extension: "webp".to_string(),
            kind: kind.to_string(),
            size: 0,
            url: format!("https://example.com/1/{}/image.webp", id),
            mime: "image/webp".to_string(),
        }
    }

    #[test]
    fn test_deserialize_with_variants() {
        let file: File = serde_json::from_str(AVATAR_JSON).unwrap();

        assert_eq!(file.id, 1);
        assert_eq!(file.name, "Avatar");
        assert_eq!(file.variants.len(), 1);

        let variant = &file.variants[0];
        assert_eq!(variant.id, 101);
        assert_eq!(variant.score, 100);
        assert_eq!(variant.kind, "image");
        assert_eq!(variant.mime, "image/webp");
    }

    #[test]
    fn test_serialize_uses_type_key() {
        let json = serde_json::to_value(variant(101, 100, "image")).unwrap();

        assert_eq!(json["type"], "image");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_best_variant() {
        let file = File {
            id: 1,
            name: "image".to_string(),
            variants: vec![variant(101, 10, "image"), variant(102, 100, "image"), variant(103, 100, "image")],
        };

        assert_eq!(file.best_variant().map(|v| v.id), Some(102));
    }

    #[test]
    fn test_best_variant_empty() {
        let file: File = serde_json::from_str(r#"{"id":1,"name":"empty"}"#).unwrap();
        assert!(file.best_variant().is_none());
    }

    #[test]
    fn test_variants_of_type() {
        let file = File {
            id: 1,
            name: "clip".to_string(),
            variants: vec![variant(101, 10, "image"), variant(102, 20, "video"), variant(103, 30, "image")],
        };

        let ids: Vec<u64> = file.variants_of_type("image").map(|v| v.id).collect();
        assert_eq!(ids, vec![101, 103]);
    }
}
