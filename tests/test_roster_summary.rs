use logtest::Logger;
use volunteer_signup::domain::roster::Roster;

// Only one test lives in this file: the capturing logger is process-wide.
#[test]
fn test_print_summary_reports_headcount_and_unassigned() {
    let mut logger = Logger::start();

    let mut roster = Roster::demo();
    roster.add_volunteer("Pat").unwrap();
    roster.add_volunteer("Sam").unwrap();
    roster.sign_up("Pat", "Childcare", &["Saturday morning"]).unwrap();

    roster.print_summary();

    let mut lines = Vec::new();
    while let Some(record) = logger.pop() {
        lines.push(record.args().to_string());
    }

    let logged = |needle: &str| lines.iter().any(|line| line.contains(needle));
    assert!(logged("Shifts: 6, jobs: 4, volunteers: 2"), "log lines: {:#?}", lines);
    assert!(logged("Job: Childcare (6 shifts, 1 volunteers)"), "log lines: {:#?}", lines);
    assert!(logged("Job: Bartending (6 shifts, 0 volunteers)"), "log lines: {:#?}", lines);
    assert!(logged("Volunteers without a job: 1"), "log lines: {:#?}", lines);
    assert!(logged("Volunteers created this run: "), "log lines: {:#?}", lines);
}
