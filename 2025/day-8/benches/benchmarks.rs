use aoc2025_day_8::{part1, part2};

// 1000 boxes inside a 100k cube, loaded at compile time to keep I/O out of the measurement
const INPUT1: &str = include_str!("../input1.txt");

fn main() {
    divan::main();
}

#[divan::bench]
fn bench_part1() {
    part1::process(divan::black_box(INPUT1)).unwrap();
}

#[divan::bench]
fn bench_part2() {
    part2::process(divan::black_box(INPUT1)).unwrap();
}
