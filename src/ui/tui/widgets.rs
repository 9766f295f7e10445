use ratatui::widgets::ListState;

pub(super) fn list_state(selected: usize) -> ListState {
    let mut st = ListState::default();
    st.select(Some(selected));
    st
}

/// First row index to draw so that `selected` stays inside a window of
/// `fit` rows.
pub(super) fn first_visible(selected: usize, fit: usize) -> usize {
    if fit == 0 || selected < fit {
        0
    } else {
        selected + 1 - fit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_follows_selection() {
        assert_eq!(first_visible(0, 4), 0);
        assert_eq!(first_visible(3, 4), 0);
        assert_eq!(first_visible(4, 4), 1);
        assert_eq!(first_visible(9, 4), 6);
        assert_eq!(first_visible(5, 0), 0);
    }
}
