/// Fetch lifecycle state for the single weather load.
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variants() {
        let loading: FetchState<i32> = FetchState::Loading;
        assert!(loading.is_loading());
        assert_eq!(loading.data(), None);

        let ok = FetchState::Success(7);
        assert_eq!(ok.data(), Some(&7));
        assert_eq!(ok.error(), None);

        let err: FetchState<i32> = FetchState::Error("boom".into());
        assert_eq!(err.error(), Some("boom"));
    }
}
