use serde::Deserialize;

use super::repo::Statistic;
use crate::{dto::double_option, error::ApiResult, validate};

#[derive(Debug, Deserialize)]
pub struct StatisticBody {
    pub number: String,
    pub label: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

impl StatisticBody {
    pub fn validate(&self) -> ApiResult<()> {
        validate::text("number", &self.number, 50)?;
        validate::text("label", &self.label, 100)?;
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct StatisticPatch {
    pub number: Option<String>,
    pub label: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub icon: Option<Option<String>>,
    pub sort_order: Option<i32>,
}

impl StatisticPatch {
    pub fn is_empty(&self) -> bool {
        self.number.is_none()
            && self.label.is_none()
            && self.icon.is_none()
            && self.sort_order.is_none()
    }

    pub fn validate(&self) -> ApiResult<()> {
        if let Some(number) = &self.number {
            validate::text("number", number, 50)?;
        }
        if let Some(label) = &self.label {
            validate::text("label", label, 100)?;
        }
        Ok(())
    }

    pub fn apply(&self, row: &mut Statistic) {
        if let Some(v) = &self.number {
            row.number = v.clone();
        }
        if let Some(v) = &self.label {
            row.label = v.clone();
        }
        if let Some(v) = &self.icon {
            row.icon = v.clone();
        }
        if let Some(v) = self.sort_order {
            row.sort_order = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Statistic {
        Statistic {
            id: 1,
            number: "150+".into(),
            label: "projects delivered".into(),
            icon: Some("🎯".into()),
            sort_order: 1,
        }
    }

    #[test]
    fn number_only_patch_leaves_the_rest() {
        let patch: StatisticPatch = serde_json::from_str(r#"{"number": "200+"}"#).unwrap();
        let mut r = row();
        patch.apply(&mut r);
        assert_eq!(r.number, "200+");
        assert_eq!(r.label, "projects delivered");
        assert_eq!(r.icon.as_deref(), Some("🎯"));
        assert_eq!(r.sort_order, 1);
    }

    #[test]
    fn icon_null_clears_it() {
        let patch: StatisticPatch = serde_json::from_str(r#"{"icon": null}"#).unwrap();
        let mut r = row();
        patch.apply(&mut r);
        assert_eq!(r.icon, None);
    }
}
