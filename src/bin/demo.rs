//! Demonstration driver: exercises the table end to end and finishes with
//! the Roman-numeral conversions. Set RUST_LOG=info for step banners.

use std::error::Error;

use chain_table::{roman_to_int, ChainTable};
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Six buckets, each pre-seeded with key i and a random value in [2, 9].
    let mut table: ChainTable<i64, i64> = ChainTable::with_random_values(6, 2, 9)?;

    info!("insert 9 -> 15 (collides into bucket 3)");
    table.insert(9, 15)?;
    println!("{table}");

    info!("upsert 10 -> 4, then 10 -> 6 (second overwrites in place)");
    table.insert_or_assign(10, 4);
    println!("{table}");
    table.insert_or_assign(10, 6);
    println!("{table}");
    table.insert_or_assign(4, 43);
    println!("{table}");

    println!("contains value 43: {}", table.contains(&43));
    println!("contains value 23232: {}", table.contains(&23232));
    println!("chain length in key 4's bucket: {}", table.count(4));
    println!("chain length in key 9's bucket: {}", table.count(9));
    println!("chain length in key 0's bucket: {}", table.count(0));
    println!("search by key 4: {}", table.search(4)?);

    info!("deep copy, then assign");
    println!("original:\n{table}");
    let mut copy = table.clone();
    println!("copy:\n{copy}");
    let mut assigned: ChainTable<i64, i64> = ChainTable::new(1)?;
    assigned.clone_from(&table);
    println!("assigned:\n{assigned}");

    info!("erase 9 twice (second is a miss), then key 0");
    println!("erase 9: {}", copy.erase(9));
    println!("erase 9: {}", copy.erase(9));
    println!("erase 0: {}", copy.erase(0));
    println!("{copy}");

    info!("roman numeral conversions");
    for text in ["MMMDCCLXXII", "MCCCLXXV", "MMMMMDCCXLIII", "IIX", "CCV", "XX"] {
        println!("{text}: {}", roman_to_int(text)?);
    }

    Ok(())
}
