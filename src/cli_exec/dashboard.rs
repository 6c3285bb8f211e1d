use prepdesk::explorer::render_home;

use super::*;

pub(super) fn handle_exams_command(config: &DeskConfig, json: bool) -> Result<()> {
    let client = connect(config)?;
    let exams = fetch_upcoming(&client)?;
    if json {
        return print_json(&exams, "exams");
    }

    if exams.is_empty() {
        println!("No upcoming exams");
        return Ok(());
    }
    let width = exams.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);
    for e in &exams {
        println!(
            "{:<width$}  {:>4}d  {}",
            e.name,
            e.days_remaining,
            e.date.date(),
            width = width
        );
    }
    Ok(())
}

pub(super) fn handle_stats_command(config: &DeskConfig, json: bool) -> Result<()> {
    let client = connect(config)?;
    let exams = fetch_upcoming(&client)?;
    let store = load_store(&client)?;
    let stats = render_home(&store, &home_ctx(&exams));
    if json {
        return print_json(&stats, "stats");
    }

    match &stats.next_exam {
        Some(exam) => println!("next exam: {} ({} days)", exam.name, exam.days_remaining),
        None => println!("next exam: none"),
    }
    let e = &stats.editorials;
    println!("editorials: {}", e.total);
    println!("read: {}", e.read);
    println!("unread: {}", e.unread);
    println!("per day: {:.1}", e.per_day);
    Ok(())
}
