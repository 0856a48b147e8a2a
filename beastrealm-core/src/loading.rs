//! Per-field load status for pages backed by several API calls.
//!
//! A failed call degrades one field to a placeholder string instead of
//! failing the page.

use std::fmt;

pub const LOADING_TEXT: &str = "加载中";
pub const FAILED_TEXT: &str = "加载失败";
pub const UNAVAILABLE_TEXT: &str = "暂未接入，请联系后端";
pub const PARTIAL_LOAD_FAILURE: &str = "部分数据加载失败，请稍后重试";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed,
    /// The endpoint is missing on this server build.
    Unavailable,
}

impl<T> FieldState<T> {
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// Map a fetch result, logging the failure under `label`.
    pub fn from_result<E: fmt::Display>(label: &str, result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) => {
                log::error!("{label} failed to load: {err}");
                Self::Failed
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for FieldState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str(LOADING_TEXT),
            Self::Ready(value) => value.fmt(f),
            Self::Failed => f.write_str(FAILED_TEXT),
            Self::Unavailable => f.write_str(UNAVAILABLE_TEXT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_render_per_state() {
        assert_eq!(FieldState::<u32>::Loading.to_string(), "加载中");
        assert_eq!(FieldState::Ready(1200).to_string(), "1200");
        assert_eq!(FieldState::<u32>::Failed.to_string(), "加载失败");
        assert_eq!(FieldState::<u32>::Unavailable.to_string(), UNAVAILABLE_TEXT);
    }

    #[test]
    fn results_map_to_states() {
        let ok: FieldState<u32> = FieldState::from_result("gold", Ok::<_, String>(5));
        assert_eq!(ok.ready(), Some(&5));
        let failed: FieldState<u32> = FieldState::from_result("gold", Err("offline"));
        assert!(failed.is_failed());
    }
}
