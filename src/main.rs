use byte_queue::ByteQueue;

fn main() -> byte_queue::Result<()> {
    let mut queue = ByteQueue::new();
    dbg!(&queue);

    for name in ["file10.log", "file2.log", "file1.log", "notes.txt"] {
        queue.push_back(name.as_bytes())?;
    }
    queue.push_front(b"readme.md")?;
    dbg!(&queue);

    queue.sort_natural();
    dbg!(&queue);

    queue.reverse();
    dbg!(&queue);

    let mut buf = [0u8; 8];
    while let Some(written) = queue.pop_front_into(&mut buf) {
        println!(
            "popped {:?} ({} of it fit)",
            String::from_utf8_lossy(&buf[..written]),
            written
        );
    }

    Ok(())
}
