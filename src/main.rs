use anyhow::Result;
use std::env;

use campus_roster::{
    renumber, swap_by_value, swap_in_place, Enrollee, Faculty, University, VERSION,
};

fn main() -> Result<()> {
    // Unconditional greeting, printed in every mode
    println!("Hello World!");

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "roster" {
        // Roster export mode
        run_roster_export()?;
    } else {
        // Walkthrough mode (default)
        run_demo();
    }

    Ok(())
}

/// The sample campus every mode starts from.
fn sample_roster() -> University {
    let mut university = University::new("State University".to_string(), 1867);

    university.enroll(Enrollee::new(
        1,
        "John Doe".to_string(),
        2023,
        "Computer Science".to_string(),
    ));
    university.enroll(Enrollee::new(
        2,
        "Jane Doe".to_string(),
        2024,
        "Computer Science".to_string(),
    ));
    university.enroll(Enrollee::new(
        3,
        "Jim Doe".to_string(),
        2025,
        "Computer Science".to_string(),
    ));
    university.hire(Faculty::new(
        "Dr. Smith".to_string(),
        50,
        "Mathematics".to_string(),
    ));

    university
}

fn run_demo() {
    println!("🎓 Campus Roster v{} - enrollment walkthrough", VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load the sample roster
    let mut university = sample_roster();
    println!(
        "\n📋 {} ({}): {} enrollees, {} faculty",
        university.name,
        university.year,
        university.enrollee_count(),
        university.faculty_count()
    );

    // 2. Course actions
    println!("\n📝 Course actions");
    if let Some(john) = university.find_by_name("John Doe") {
        john.register_course(1);
    }
    if let Some(jane) = university.find_by_name("Jane Doe") {
        jane.register_course("CS 225");
        jane.drop_course("CS 225");
    }

    // 3. Everyone introduces themselves
    println!("\n👋 Introductions");
    for line in university.introductions() {
        println!("{}", line);
    }

    // 4. Call semantics
    println!("\n🔁 Call semantics");
    let a = 10;
    let b = 20;
    println!("a = {}, b = {}", a, b);
    swap_by_value(a, b);
    println!("after swap_by_value: a = {}, b = {} (the copies swapped, not these)", a, b);

    let mut x = a;
    let mut y = b;
    swap_in_place(&mut x, &mut y);
    println!("after swap_in_place: x = {}, y = {}", x, y);

    let mut enrollee = Enrollee::new(
        1,
        "John Doe".to_string(),
        2023,
        "Computer Science".to_string(),
    );
    println!("enrollee id = {}", enrollee.id);
    renumber(&mut enrollee, 2);
    println!("after renumber: enrollee id = {}", enrollee.id);

    // Renumbering through the roster's own `&mut` borrow sticks too
    if let Err(err) = university.update_enrollee(3, |e| e.id = 33) {
        eprintln!("{}", err);
    }
    if let Some(jim) = university.find_by_name("Jim Doe") {
        println!("Jim Doe now has id {}", jim.id);
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✓ Walkthrough complete");
}

fn run_roster_export() -> Result<()> {
    let university = sample_roster();
    let json = serde_json::to_string_pretty(&university)?;
    println!("{}", json);

    Ok(())
}
