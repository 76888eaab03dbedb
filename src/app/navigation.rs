use super::*;

pub const HOME_ROUTE: &str = "/";

pub fn lesson_route(id: u32) -> String {
    format!("/module/{id}")
}

/// Lección actual + total de lecciones (None mientras no se conozca o si falló el índice).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub current: u32,
    pub total: Option<usize>,
}

impl NavState {
    pub fn new(current: u32) -> Self {
        Self {
            current,
            total: None,
        }
    }

    pub fn buttons(&self) -> NavButtons {
        compute(self.current, self.total)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavButtons {
    pub show_prev: bool,
    pub prev_target: u32,
    pub show_next: bool,
    pub next_target: u32,
}

/// Sin total conocido no se muestra "siguiente": mejor ocultarlo que enlazar a un 404.
pub fn compute(current: u32, total: Option<usize>) -> NavButtons {
    NavButtons {
        show_prev: current > 1,
        prev_target: current.saturating_sub(1),
        show_next: total.is_some_and(|t| (current as usize) < t),
        next_target: current.saturating_add(1),
    }
}

fn leading_number(text: &str) -> Option<u32> {
    let digits: String = text.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok().filter(|id| *id > 0)
}

/// `/module/{id}` en la ruta, si no `?id=` en la query, si no 1.
pub fn lesson_id_from_location(location: &str) -> u32 {
    let (path, query) = match location.split_once('?') {
        Some((p, q)) => (p, q),
        None => (location, ""),
    };

    if let Some(id) = path
        .find("/module/")
        .and_then(|pos| leading_number(&path[pos + "/module/".len()..]))
    {
        return id;
    }

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "id")
        .and_then(|(_, value)| leading_number(value))
        .unwrap_or(1)
}

impl LessonApp {
    pub fn nav_buttons(&self) -> NavButtons {
        self.nav.buttons()
    }

    pub fn go_prev(&mut self) {
        let buttons = self.nav_buttons();
        if buttons.show_prev {
            self.open_lesson(buttons.prev_target);
        }
    }

    pub fn go_next(&mut self) {
        let buttons = self.nav_buttons();
        if buttons.show_next {
            self.open_lesson(buttons.next_target);
        }
    }

    /// Vuelve a la lista de lecciones.
    pub fn go_home(&mut self) {
        self.load_generation += 1;
        self.state = AppState::Home;
        self.home.begin_loading();
        self.dispatcher.fetch_index(self.load_generation);
    }

    /// Navega a una ruta (`/` o `/module/N`).
    pub fn open_route(&mut self, route: &str) {
        if route == HOME_ROUTE {
            self.go_home();
        } else {
            self.open_lesson(lesson_id_from_location(route));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_lesson_has_no_previous() {
        let b = compute(1, Some(5));
        assert!(!b.show_prev);
        assert!(b.show_next);
        assert_eq!(b.next_target, 2);
    }

    #[test]
    fn last_lesson_has_no_next() {
        let b = compute(5, Some(5));
        assert!(b.show_prev);
        assert_eq!(b.prev_target, 4);
        assert!(!b.show_next);
    }

    #[test]
    fn unknown_total_hides_next() {
        let b = compute(3, None);
        assert!(b.show_prev);
        assert!(!b.show_next);
    }

    #[test]
    fn bounds_hold_for_every_combination() {
        for current in 1..=12u32 {
            for total in [None, Some(0), Some(1), Some(6), Some(12), Some(20)] {
                let b = compute(current, total);
                assert_eq!(b.show_prev, current > 1);
                assert_eq!(
                    b.show_next,
                    total.is_some_and(|t| (current as usize) < t)
                );
            }
        }
    }

    #[test]
    fn lesson_id_comes_from_path_then_query() {
        assert_eq!(lesson_id_from_location("/module/7"), 7);
        assert_eq!(lesson_id_from_location("http://host/module/12/?id=3"), 12);
        assert_eq!(lesson_id_from_location("/module.html?x=1&id=4"), 4);
        assert_eq!(lesson_id_from_location("/module/abc?id=9"), 9);
        assert_eq!(lesson_id_from_location(""), 1);
        assert_eq!(lesson_id_from_location("/module/0"), 1);
    }

    #[test]
    fn routes() {
        assert_eq!(lesson_route(3), "/module/3");
        assert_eq!(lesson_id_from_location(&lesson_route(15)), 15);
    }
}
