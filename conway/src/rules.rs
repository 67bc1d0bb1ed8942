// rules.rs - Classic Life rules (B3/S23)

/// Next state of a single cell given its current state and live neighbour count.
pub fn next_state(alive: bool, neighbours: u8) -> bool {
    match (alive, neighbours) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3)            => true, // Birth
        _                     => false, // Death or stays dead
    }
}
