// rule.rs - Conway's birth/survival rule (B3/S23)

#[inline]
pub fn next_state(current_alive: bool, live_neighbors: u8) -> bool {
    match (current_alive, live_neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cells_survive_only_on_two_or_three() {
        let survivors: Vec<u8> = (0..=8).filter(|&n| next_state(true, n)).collect();
        assert_eq!(survivors, vec![2, 3]);
    }

    #[test]
    fn dead_cells_are_born_only_on_three() {
        let births: Vec<u8> = (0..=8).filter(|&n| next_state(false, n)).collect();
        assert_eq!(births, vec![3]);
    }
}
