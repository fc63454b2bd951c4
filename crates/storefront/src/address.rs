//! Postcode lookup results.
//!
//! The postcode widget runs in the browser and reports the picked address.
//! This module turns that report into the zipcode and the single-line
//! address stored on the account.

use serde::Deserialize;

/// `addressType` value for a road-name address.
pub const ROAD_ADDRESS: &str = "R";

/// Completion payload of the postcode widget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostcodeResult {
    pub address: String,
    /// `R` for a road-name address, `J` for a lot-number address.
    #[serde(default)]
    pub address_type: String,
    /// Legal dong/ri name.
    #[serde(default)]
    pub bname: String,
    #[serde(default)]
    pub building_name: String,
    /// Five-digit postal code.
    pub zonecode: String,
}

/// Address fields set on the account form after a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookedUpAddress {
    pub zipcode: String,
    pub address: String,
}

/// Compose the full single-line address.
///
/// Road addresses get the dong name and building name appended in
/// parentheses, each only when present. Other address types are returned
/// unchanged.
#[must_use]
pub fn compose_full_address(result: &PostcodeResult) -> String {
    if result.address_type != ROAD_ADDRESS {
        return result.address.clone();
    }

    let extras: Vec<&str> = [result.bname.as_str(), result.building_name.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

    if extras.is_empty() {
        result.address.clone()
    } else {
        format!("{} ({})", result.address, extras.join(", "))
    }
}

impl From<&PostcodeResult> for LookedUpAddress {
    fn from(result: &PostcodeResult) -> Self {
        Self {
            zipcode: result.zonecode.clone(),
            address: compose_full_address(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(address_type: &str, bname: &str, building_name: &str) -> PostcodeResult {
        PostcodeResult {
            address: "서울 강남구 테헤란로 152".to_string(),
            address_type: address_type.to_string(),
            bname: bname.to_string(),
            building_name: building_name.to_string(),
            zonecode: "06236".to_string(),
        }
    }

    #[test]
    fn test_road_address_with_dong_and_building() {
        assert_eq!(
            compose_full_address(&result("R", "역삼동", "강남파이낸스센터")),
            "서울 강남구 테헤란로 152 (역삼동, 강남파이낸스센터)"
        );
    }

    #[test]
    fn test_road_address_with_dong_only() {
        assert_eq!(
            compose_full_address(&result("R", "역삼동", "")),
            "서울 강남구 테헤란로 152 (역삼동)"
        );
    }

    #[test]
    fn test_road_address_with_building_only() {
        assert_eq!(
            compose_full_address(&result("R", "", "강남파이낸스센터")),
            "서울 강남구 테헤란로 152 (강남파이낸스센터)"
        );
    }

    #[test]
    fn test_road_address_without_extras_is_unchanged() {
        assert_eq!(
            compose_full_address(&result("R", "", "")),
            "서울 강남구 테헤란로 152"
        );
    }

    #[test]
    fn test_lot_address_ignores_extras() {
        assert_eq!(
            compose_full_address(&result("J", "역삼동", "강남파이낸스센터")),
            "서울 강남구 테헤란로 152"
        );
    }

    #[test]
    fn test_lookup_sets_zipcode() {
        let looked_up = LookedUpAddress::from(&result("R", "역삼동", ""));
        assert_eq!(looked_up.zipcode, "06236");
        assert_eq!(looked_up.address, "서울 강남구 테헤란로 152 (역삼동)");
    }

    #[test]
    fn test_payload_decodes_widget_json() {
        let payload: PostcodeResult = serde_json::from_str(
            r#"{"address":"A","addressType":"R","bname":"B","buildingName":"C","zonecode":"12345","extra":"ignored"}"#,
        )
        .unwrap_or_else(|e| panic!("decode failed: {e}"));
        assert_eq!(compose_full_address(&payload), "A (B, C)");
    }
}
