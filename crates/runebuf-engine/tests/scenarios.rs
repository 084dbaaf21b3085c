use pretty_assertions::assert_eq;
use runebuf_engine::{BufferError, PoolStats, Runes};

const TEST_BLOCK_SIZE: usize = 8;

fn read_all(runes: &Runes) -> String {
    let mut dest = vec!['\0'; runes.size()];
    runes.read(&mut dest, 0).unwrap();
    dest.into_iter().collect()
}

#[test]
fn splitting_a_middle_block() {
    let mut runes = Runes::new(TEST_BLOCK_SIZE);

    assert_eq!(runes.insert_str("01234567abcdefghSTUVWXYZ", 0), Ok(24));
    assert_eq!(runes.block_lens().collect::<Vec<_>>(), vec![8, 8, 8]);

    assert_eq!(runes.insert_str("!@#", 12), Ok(3));
    assert_eq!(runes.block_lens().collect::<Vec<_>>(), vec![8, 4, 3, 4, 8]);
    assert_eq!(read_all(&runes), "01234567abcd!@#efghSTUVWXYZ");
}

#[test]
fn insert_delete_and_read() {
    let mut runes = Runes::new(TEST_BLOCK_SIZE);

    assert_eq!(runes.insert_str("Hello, World!", 0), Ok(13));
    assert_eq!(read_all(&runes), "Hello, World!");

    assert_eq!(runes.delete(5, 7), Ok(5));
    assert_eq!(read_all(&runes), "Hello, !");

    assert_eq!(runes.insert_str("Gophers", 7), Ok(7));
    assert_eq!(read_all(&runes), "Hello, Gophers!");

    runes.close();
}

#[test]
fn emptied_blocks_are_reused() {
    let text: Vec<char> = "αβξδφγθιζ".chars().collect();
    assert!(text.len() > TEST_BLOCK_SIZE);

    let mut runes = Runes::new(TEST_BLOCK_SIZE);
    assert_eq!(runes.insert(&text, 0), Ok(9));
    assert_eq!(runes.stats().in_use, 2);

    assert_eq!(runes.delete(9, 0), Ok(9));
    assert_eq!(
        runes.stats(),
        PoolStats {
            in_use: 0,
            free: 2,
            allocated: 2
        }
    );

    assert_eq!(runes.insert(&text[..TEST_BLOCK_SIZE / 2], 0), Ok(4));
    assert_eq!(
        runes.stats(),
        PoolStats {
            in_use: 1,
            free: 1,
            allocated: 2
        }
    );
    assert_eq!(read_all(&runes), "αβξδ");
}

#[test]
fn reading_at_end_of_document() {
    let mut runes = Runes::new(TEST_BLOCK_SIZE);
    runes.insert_str("abc", 0).unwrap();

    let mut one = ['\0'; 1];
    assert_eq!(
        runes.read(&mut one, runes.size()),
        Err(BufferError::EndOfInput { copied: 0 })
    );
    assert_eq!(runes.read(&mut [], runes.size()), Ok(0));
    assert_eq!(runes.read(&mut [], runes.size() + 10), Ok(0));

    let mut three = ['\0'; 3];
    assert_eq!(runes.read(&mut three, 0), Ok(3));
}

#[test]
fn short_read_count_is_authoritative() {
    let runes = Runes::from("short");
    let mut dest = ['\0'; 16];

    let copied = match runes.read(&mut dest, 2) {
        Ok(n) => n,
        Err(err) if err.is_end_of_input() => err.copied(),
        Err(err) => panic!("unexpected error: {err}"),
    };
    assert_eq!(copied, 3);
    assert_eq!(dest[..copied].iter().collect::<String>(), "ort");
}

#[test]
fn append_builds_document_in_order() {
    let mut runes = Runes::new(3);
    for word in ["one ", "two ", "three"] {
        let at = runes.size();
        runes.insert_str(word, at).unwrap();
    }
    assert_eq!(runes.to_string(), "one two three");
    assert!(runes.block_lens().all(|n| (1..=3).contains(&n)));
}
