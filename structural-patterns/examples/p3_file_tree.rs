//! Pattern 3: Composite
//! Example: File System Tree with Removal by Identity
//!
//! Run with: cargo run --example p3_file_tree

use structural_patterns::composite::{Component, Composite, Leaf};

fn main() {
    println!("=== Composite Demo - File System ===\n");

    let mut documents = Composite::new("Documents");
    let mut pictures = Composite::new("Pictures");
    let mut work = Composite::new("Work");

    let photo = Leaf::new("vacation.jpg");
    let photo_id = photo.id();

    report(documents.add(Box::new(Leaf::new("resume.pdf"))));
    report(work.add(Box::new(Leaf::new("project.docx"))));
    report(work.add(Box::new(Leaf::new("report.xlsx"))));
    report(documents.add(Box::new(work)));
    report(pictures.add(Box::new(photo)));
    report(pictures.add(Box::new(Leaf::new("family.png"))));

    let mut root = Composite::new("root");
    let pictures_id = pictures.id();
    report(root.add(Box::new(documents)));
    report(root.add(Box::new(pictures)));

    println!("File system structure:");
    println!("{}\n", root.render(0));

    println!("A leaf rejects children:");
    let mut readme = Leaf::new("readme.txt");
    if let Err(err) = readme.add(Box::new(Leaf::new("nested.txt"))) {
        println!("{err}\n");
    }

    println!("Removing vacation.jpg from Pictures (by identity):");
    match root.remove(pictures_id) {
        Ok(mut pictures) => {
            match pictures.remove(photo_id) {
                Ok(removed) => println!("Removed '{}' from '{}'", removed.name(), pictures.name()),
                Err(err) => println!("{err}"),
            }
            // Removing the same node again fails.
            if let Err(err) = pictures.remove(photo_id) {
                println!("{err}");
            }
            report(root.add(pictures));
        }
        Err(err) => println!("{err}"),
    }

    println!("\nUpdated file system structure:");
    println!("{}", root.render(0));
}

fn report(result: Result<(), structural_patterns::composite::ComponentError>) {
    if let Err(err) = result {
        println!("{err}");
    }
}
