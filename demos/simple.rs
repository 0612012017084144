use quinx::{simplify_with_profile, Minterm};

fn main() {
    // f(b3, b2, b1, b0) = b1 xor b0, described by the indices where f is one.
    let ones = [1, 2, 5, 6, 9, 10, 13, 14];

    // Without parity recognition the cover needs one product term per pair of
    // adjacent minterms; with it, the whole function folds into a single term.
    for use_xor in [false, true] {
        let result = simplify_with_profile(&ones, &[], Some(4), use_xor);
        let cover = result.cover.expect("the input is non-empty");

        println!("use_xor = {use_xor}:");
        for term in &cover {
            println!("  {term}");
        }
        println!(
            "  ({} adjacency, {} XOR, {} XNOR merge attempts)",
            result.profile.adjacency, result.profile.xor, result.profile.xnor
        );
    }

    // Terms in the cover expand back into the rows they stand for.
    let parity: quinx::Implicant = "--^^".parse().unwrap();
    let rows: Vec<String> = parity.expansions().map(|row: Minterm| row.to_string()).collect();
    println!("rows of --^^: {}", rows.join(", "));
}
