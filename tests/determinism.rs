use langrv::{char_hash, make_builder, Builder, Permutation, SpaceConfig};

fn space(order: usize, dimension: usize, seed: u64) -> SpaceConfig {
    SpaceConfig::new()
        .with_order(order)
        .with_dimension(dimension)
        .with_seed(seed)
}

#[test]
fn independent_builders_produce_identical_vectors() {
    let a = make_builder(4, 10_000, 42).unwrap();
    let b = make_builder(4, 10_000, 42).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.permutation(), b.permutation());

    let text = "Au commencement était la Parole, et la Parole était avec Dieu.";
    assert_eq!(a.build(text), b.build(text));
    assert_eq!(
        a.build_lines(["un", "deux", "trois"]),
        b.build_lines(["un", "deux", "trois"])
    );
}

#[test]
fn builder_from_config_equals_make_builder() {
    let from_config = Builder::new(space(3, 512, 7)).unwrap();
    let shorthand = make_builder(3, 512, 7).unwrap();
    assert_eq!(from_config, shorthand);
    assert_eq!(from_config.build("hello"), shorthand.build("hello"));
}

#[test]
fn repeated_builds_are_stable() {
    let b = make_builder(3, 1000, 42).unwrap();
    let first = b.build("stable output");
    for _ in 0..5 {
        assert_eq!(b.build("stable output"), first);
    }
}

#[test]
fn seed_changes_the_space() {
    let a = make_builder(3, 1000, 1).unwrap();
    let b = make_builder(3, 1000, 2).unwrap();
    assert_ne!(a.permutation(), b.permutation());
    assert_ne!(a.build("same text"), b.build("same text"));
}

#[test]
fn char_hash_is_position_free() {
    // The hash of a character depends only on seed and codepoint.
    assert_eq!(char_hash(42, 'x', 300), char_hash(42, 'x', 300));
    assert_ne!(char_hash(42, 'x', 300), char_hash(42, 'y', 300));
}

#[test]
fn permutation_depends_on_dimension_seed_and_order() {
    let base = Permutation::new(64, 3, 42);
    assert_eq!(base, Permutation::new(64, 3, 42));
    assert_eq!(base.forward(), Permutation::new(64, 5, 42).forward());
    assert_ne!(base.order_power(), Permutation::new(64, 5, 42).order_power());
    assert_ne!(base.forward(), Permutation::new(64, 3, 43).forward());
}

#[test]
fn order_changes_vectors_but_not_hashes() {
    let three = make_builder(3, 1000, 42).unwrap();
    let four = make_builder(4, 1000, 42).unwrap();
    assert_eq!(three.permutation().forward(), four.permutation().forward());
    assert_ne!(three.build("abcdef"), four.build("abcdef"));
    // Shorter than either window: only the boundary window differs.
    assert_eq!(
        three.build_with_boundary("ab", false),
        four.build_with_boundary("ab", false)
    );
}

#[test]
fn frozen_reference_vector() {
    let b = make_builder(3, 8, 42).unwrap();
    assert_eq!(b.build("ab").components(), &[-3, 1, 1, 3, 1, 1, 3, 1]);
}
