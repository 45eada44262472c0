//! Exact console output of the default 25x25 glider simulation

use glider_life::{Grid, Simulation};

const GLIDER: [(usize, usize); 5] = [(11, 12), (12, 13), (13, 11), (13, 12), (13, 13)];

fn run(generations: i64) -> String {
    let mut simulation = Simulation::new(Grid::default());
    let mut out = Vec::new();
    simulation.run(generations, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn expected_grid(live: &[(usize, usize)]) -> Vec<String> {
    (0..25)
        .map(|row| {
            (0..25)
                .map(|col| if live.contains(&(row, col)) { 'X' } else { '.' })
                .collect()
        })
        .collect()
}

#[test]
fn test_single_generation_output() {
    let text = run(1);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 27);
    assert_eq!(lines[0], "Generation 1:");
    assert_eq!(&lines[1..26], expected_grid(&GLIDER).as_slice());
    assert_eq!(lines[26], "");
    assert!(text.ends_with("\n\n"));
}

#[test]
fn test_zero_generations_prints_nothing() {
    assert_eq!(run(0), "");
    assert_eq!(run(-1), "");
}

#[test]
fn test_fifth_generation_shows_translated_glider() {
    let text = run(5);
    let blocks: Vec<&str> = text.split_terminator("\n\n").collect();
    assert_eq!(blocks.len(), 5);

    let last: Vec<&str> = blocks[4].lines().collect();
    assert_eq!(last[0], "Generation 5:");
    let moved: Vec<_> = GLIDER.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(&last[1..], expected_grid(&moved).as_slice());
}
