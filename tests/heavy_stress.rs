#![cfg(feature = "heavy")]
use hot100::problems::arrays::{max_sliding_window, subarray_sum, trap};
use hot100::problems::dp::{coin_change, length_of_lis};
use hot100::problems::linked_list::{list, reverse_list};
use hot100::problems::strings::{longest_palindrome, longest_substring};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_text(rng: &mut StdRng, alphabet: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}

fn random_values(rng: &mut StdRng, len: usize, range: std::ops::Range<i32>) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

#[test]
fn heavy_palindromes_on_long_text() {
    let mut rng = StdRng::seed_from_u64(123);
    let s = random_text(&mut rng, b"ab", 20_000);
    let linear = longest_palindrome::manacher(&s);
    let quadratic = longest_palindrome::expand_around_center(&s);
    assert_eq!(linear.len(), quadratic.len());
    assert!(s.contains(&linear));
}

#[test]
fn heavy_windows_over_large_input() {
    let mut rng = StdRng::seed_from_u64(7);
    let nums = random_values(&mut rng, 500_000, -1_000_000..1_000_000);
    for k in [1, 17, 4_096] {
        let deque = max_sliding_window::monotonic_deque(&nums, k);
        assert_eq!(deque.len(), nums.len() - k + 1);
        assert_eq!(deque, max_sliding_window::max_heap(&nums, k));
    }
}

#[test]
fn heavy_trapping_and_prefix_counts() {
    let mut rng = StdRng::seed_from_u64(99);
    let height = random_values(&mut rng, 1_000_000, 0..100_000);
    let expected = trap::two_pointers(&height);
    assert_eq!(trap::prefix_max(&height), expected);
    assert_eq!(trap::monotonic_stack(&height), expected);

    let small = random_values(&mut rng, 3_000, -3..4);
    assert_eq!(
        subarray_sum::prefix_hash(&small, 2),
        subarray_sum::brute_force(&small, 2)
    );
}

#[test]
fn heavy_dp_tables() {
    let mut rng = StdRng::seed_from_u64(2024);
    let nums = random_values(&mut rng, 4_000, -10_000..10_000);
    assert_eq!(length_of_lis::patience(&nums), length_of_lis::quadratic(&nums));

    let coins = [186, 419, 83, 408, 7];
    assert_eq!(
        coin_change::bottom_up(&coins, 50_000),
        coin_change::bfs(&coins, 50_000)
    );
}

#[test]
fn heavy_substring_window() {
    let mut rng = StdRng::seed_from_u64(5);
    let s = random_text(&mut rng, b"abcdefghijklmnopqrstuvwxyz", 200_000);
    let expected = longest_substring::sliding_window_map(&s);
    assert!(expected <= 26);
    assert_eq!(longest_substring::last_index_table(&s), expected);
}

#[test]
fn heavy_list_relinking() {
    let values: Vec<i32> = (0..2_000_000).collect();
    let reversed = reverse_list::iterative(list::from_slice(&values));
    let back = reverse_list::iterative(reversed.clone());
    assert_eq!(list::to_vec(back.as_deref()), values);
    assert_eq!(reversed.as_ref().map(|n| n.val), Some(1_999_999));
}
