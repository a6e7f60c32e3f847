/// View state shared by the inline carousel and the fullscreen lightbox.
/// Both surfaces read the same index, so they can never disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryState {
    len: usize,
    index: usize,
    lightbox_open: bool,
}

impl GalleryState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            lightbox_open: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox_open
    }

    /// Prev/next controls and the dot strip only make sense for several images.
    pub fn has_navigation(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn select(&mut self, index: usize) {
        if self.len > 0 {
            self.index = index % self.len;
        }
    }

    pub fn open_lightbox(&mut self) {
        if self.len > 0 {
            self.lightbox_open = true;
        }
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox_open = false;
    }

    /// One-based counter such as `2 / 5`.
    pub fn position_label(&self) -> String {
        if self.len == 0 {
            return String::new();
        }
        format!("{} / {}", self.index + 1, self.len)
    }
}

/// What a key press did, so the caller knows whether to dismiss the modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    LightboxClosed,
    Dismiss,
    Navigated,
    Ignored,
}

/// Applies a `KeyboardEvent.key` value to the gallery. Escape peels one layer
/// at a time: lightbox first, then the modal itself.
pub fn dispatch_key(key: &str, gallery: &mut GalleryState) -> KeyOutcome {
    match key {
        "Escape" => {
            if gallery.is_lightbox_open() {
                gallery.close_lightbox();
                KeyOutcome::LightboxClosed
            } else {
                KeyOutcome::Dismiss
            }
        }
        "ArrowRight" if !gallery.is_empty() => {
            gallery.next();
            KeyOutcome::Navigated
        }
        "ArrowLeft" if !gallery.is_empty() => {
            gallery.prev();
            KeyOutcome::Navigated
        }
        _ => KeyOutcome::Ignored,
    }
}

/// A click dismisses an overlay only when it landed on the overlay element
/// itself, not on anything nested inside it.
pub fn is_backdrop_click<T: PartialEq>(target: Option<T>, current_target: Option<T>) -> bool {
    match (target, current_target) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod navigation_tests {
        use super::*;

        #[test]
        fn new_starts_at_first_image_with_lightbox_closed() {
            let g = GalleryState::new(4);
            assert_eq!(g.index(), 0);
            assert!(!g.is_lightbox_open());
            assert!(g.has_navigation());
        }

        #[test]
        fn next_wraps_to_start() {
            let mut g = GalleryState::new(3);
            g.next();
            g.next();
            assert_eq!(g.index(), 2);
            g.next();
            assert_eq!(g.index(), 0);
        }

        #[test]
        fn prev_wraps_to_end() {
            let mut g = GalleryState::new(3);
            g.prev();
            assert_eq!(g.index(), 2);
        }

        #[test]
        fn n_steps_return_to_start_from_any_index() {
            for len in 1..=7 {
                for start in 0..len {
                    let mut g = GalleryState::new(len);
                    g.select(start);

                    for _ in 0..len {
                        g.next();
                    }
                    assert_eq!(g.index(), start, "next cycle len={len} start={start}");

                    for _ in 0..len {
                        g.prev();
                    }
                    assert_eq!(g.index(), start, "prev cycle len={len} start={start}");
                }
            }
        }

        #[test]
        fn next_then_prev_is_identity() {
            for len in 1..=6 {
                for start in 0..len {
                    let mut g = GalleryState::new(len);
                    g.select(start);
                    g.next();
                    g.prev();
                    assert_eq!(g.index(), start);
                }
            }
        }

        #[test]
        fn single_image_has_no_navigation() {
            let mut g = GalleryState::new(1);
            assert!(!g.has_navigation());
            g.next();
            assert_eq!(g.index(), 0);
            g.prev();
            assert_eq!(g.index(), 0);
        }

        #[test]
        fn empty_gallery_never_moves() {
            let mut g = GalleryState::new(0);
            g.next();
            g.prev();
            g.select(5);
            g.open_lightbox();
            assert_eq!(g.index(), 0);
            assert!(!g.is_lightbox_open());
            assert_eq!(g.position_label(), "");
        }

        #[test]
        fn select_reduces_out_of_range_index() {
            let mut g = GalleryState::new(4);
            g.select(6);
            assert_eq!(g.index(), 2);
        }

        #[test]
        fn position_label_is_one_based() {
            let mut g = GalleryState::new(5);
            g.next();
            assert_eq!(g.position_label(), "2 / 5");
        }
    }

    mod lightbox_tests {
        use super::*;

        #[test]
        fn lightbox_keeps_current_index() {
            let mut g = GalleryState::new(3);
            g.next();
            g.open_lightbox();
            assert!(g.is_lightbox_open());
            assert_eq!(g.index(), 1);
            g.next();
            g.close_lightbox();
            assert_eq!(g.index(), 2);
        }
    }

    mod key_tests {
        use super::*;

        #[test]
        fn escape_closes_lightbox_then_dismisses() {
            let mut g = GalleryState::new(2);
            g.open_lightbox();

            assert_eq!(dispatch_key("Escape", &mut g), KeyOutcome::LightboxClosed);
            assert!(!g.is_lightbox_open());

            assert_eq!(dispatch_key("Escape", &mut g), KeyOutcome::Dismiss);
        }

        #[test]
        fn two_escapes_dismiss_exactly_once() {
            let mut g = GalleryState::new(3);
            g.open_lightbox();
            let dismissals = ["Escape", "Escape"]
                .iter()
                .filter(|key| dispatch_key(key, &mut g) == KeyOutcome::Dismiss)
                .count();
            assert_eq!(dismissals, 1);
        }

        #[test]
        fn arrows_navigate_without_touching_lightbox() {
            let mut g = GalleryState::new(3);
            assert_eq!(dispatch_key("ArrowRight", &mut g), KeyOutcome::Navigated);
            assert_eq!(g.index(), 1);
            assert!(!g.is_lightbox_open());

            g.open_lightbox();
            assert_eq!(dispatch_key("ArrowLeft", &mut g), KeyOutcome::Navigated);
            assert_eq!(dispatch_key("ArrowLeft", &mut g), KeyOutcome::Navigated);
            assert_eq!(g.index(), 2);
            assert!(g.is_lightbox_open());
        }

        #[test]
        fn arrows_ignored_without_images() {
            let mut g = GalleryState::new(0);
            assert_eq!(dispatch_key("ArrowRight", &mut g), KeyOutcome::Ignored);
            assert_eq!(dispatch_key("ArrowLeft", &mut g), KeyOutcome::Ignored);
        }

        #[test]
        fn escape_dismisses_without_images() {
            let mut g = GalleryState::new(0);
            assert_eq!(dispatch_key("Escape", &mut g), KeyOutcome::Dismiss);
        }

        #[test]
        fn other_keys_are_ignored() {
            let mut g = GalleryState::new(3);
            assert_eq!(dispatch_key("Enter", &mut g), KeyOutcome::Ignored);
            assert_eq!(dispatch_key("ArrowUp", &mut g), KeyOutcome::Ignored);
            assert_eq!(g.index(), 0);
        }
    }

    #[test]
    fn backdrop_click_requires_exact_target() {
        assert!(is_backdrop_click(Some(1), Some(1)));
        assert!(!is_backdrop_click(Some(2), Some(1)));
        assert!(!is_backdrop_click(None, Some(1)));
        assert!(!is_backdrop_click::<i32>(None, None));
    }
}
