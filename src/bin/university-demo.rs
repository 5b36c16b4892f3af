//! Scripted walkthrough of the university model.
//!
//! Builds a small faculty, links staff, departments and courses, and prints
//! the resulting summaries to stdout. Link events are logged to stderr;
//! set `RUST_LOG=debug` to also see ignored duplicates.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use u_university::models::{CourseKey, DepartmentKey, StaffKey};
use u_university::validation::validate_university;
use u_university::University;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("--- University Department, Course, and Staff Walkthrough ---\n");
    let mut uni = University::new();

    println!("--- Departments ---");
    let cs = uni.create_department("Computer Science", "CS", "LAB-201", "4888");
    let ee = uni.create_department("Electrical Engineering", "EE", "ENG-305", "8569");
    let hum = uni.create_department("Humanities", "HUM", "HUM-102", "2084");
    print_departments(&uni, &[cs, ee, hum])?;

    println!("--- Staff ---");
    let gachiri = uni.create_lecturer(
        "L001",
        "Dr. Chris Gachiri",
        "c.gachiri@uni.edu",
        "Artificial Intelligence",
    );
    let mbuki = uni.create_lecturer("L002", "Dr. Moses Mbuki", "m.mbuki@uni.edu", "Digital Electronics");
    let wangari = uni.create_lecturer(
        "L003",
        "Prof. Wangari Wambui",
        "w.wangari@uni.edu",
        "Software Engineering",
    );
    let clerk = uni.create_administrative_staff(
        "A001",
        "Mr. Kelvin Mungai",
        "k.mungai@uni.edu",
        "Department Secretary",
    );
    let registrar = uni.create_administrative_staff("A002", "Ms. Rose Nova", "r.nova@uni.edu", "Registrar");
    for staff in [gachiri, mbuki, clerk, registrar] {
        println!("{}\n", uni.staff_details(staff)?);
    }

    println!("--- Staff with Multiple Departments ---");
    uni.assign_department(gachiri, cs)?;
    uni.assign_department(gachiri, ee)?;
    uni.assign_department(mbuki, ee)?;
    uni.assign_department(clerk, cs)?;
    uni.assign_department(clerk, hum)?;
    uni.set_head_of_department(cs, Some(gachiri))?;
    for staff in [gachiri, clerk] {
        let name = uni.staff(staff).map(|s| s.name()).unwrap_or_default();
        println!("{name}: {}", uni.describe_departments_of(staff)?);
    }
    println!();
    for dept in [cs, ee] {
        let name = uni.department(dept).map(|d| d.name()).unwrap_or_default();
        println!("{name} Staff:");
        for member in uni.staff_of(dept)? {
            println!(" - {} ({})", member.name(), member.staff_id());
        }
    }
    println!();

    println!("--- Courses ---");
    let programming = uni.create_course("COMP101", "Introduction to Programming", 3, Some(cs))?;
    let circuits = uni.create_course("EE205", "Circuit Analysis I", 4, Some(ee))?;
    let algorithms = uni.create_course("COMP320", "Data Structures & Algorithms", 4, Some(cs))?;
    uni.create_course("HUM101", "World Literature", 3, Some(hum))?;
    print_courses(&uni, &[programming, circuits, algorithms])?;

    println!("--- Courses with Multiple Lecturers ---");
    uni.add_lecturer(programming, gachiri)?;
    uni.add_lecturer(programming, wangari)?;
    uni.add_lecturer(circuits, mbuki)?;
    uni.add_lecturer(algorithms, gachiri)?;
    print_courses(&uni, &[programming, circuits, algorithms])?;

    println!("--- Lecturer Teaching Lists ---");
    for lecturer in [gachiri, mbuki, wangari] {
        print_teaching(&uni, lecturer)?;
    }
    println!();

    println!("--- Final Department Summary ---");
    print_departments(&uni, &[cs, ee])?;

    match validate_university(&uni) {
        Ok(()) => info!("registry consistent"),
        Err(errors) => {
            for e in &errors {
                tracing::warn!(kind = ?e.kind, "{}", e.message);
            }
            anyhow::bail!("registry has {} integrity errors", errors.len());
        }
    }
    Ok(())
}

fn print_departments(uni: &University, departments: &[DepartmentKey]) -> Result<()> {
    for &dept in departments {
        println!("{}\n", uni.describe_department(dept)?);
    }
    Ok(())
}

fn print_courses(uni: &University, courses: &[CourseKey]) -> Result<()> {
    for &course in courses {
        println!("{}\n", uni.describe_course(course)?);
    }
    Ok(())
}

fn print_teaching(uni: &University, lecturer: StaffKey) -> Result<()> {
    let name = uni.staff(lecturer).map(|s| s.name()).unwrap_or_default();
    println!("{name} is teaching:");
    for course in uni.courses_taught_by(lecturer)? {
        println!(" - {} ({})", course.title(), course.code());
    }
    Ok(())
}
