//! Built-in records for screens the backend has no endpoint for yet.

use crate::models::{
    Announcement, Assignment, ChatThread, FeePayment, FeeStructure, Notification, SubjectResult,
    TermResults,
};

pub fn announcements() -> Vec<Announcement> {
    let item = |id, title: &str, content: &str, category: &str, priority: &str, date: &str, author: &str, read| {
        Announcement {
            id,
            title: title.to_string(),
            content: content.to_string(),
            category: category.to_string(),
            priority: priority.to_string(),
            date: date.to_string(),
            author: author.to_string(),
            read_status: read,
            ..Default::default()
        }
    };

    vec![
        item(1, "Parent-Teacher Conference", "We are pleased to invite all parents to our upcoming Parent-Teacher Conference scheduled for next week.", "academic", "high", "2024-07-10", "School Administration", false),
        item(2, "Sports Day Preparation", "Get ready for our annual Sports Day! Registration forms are available at the school office.", "events", "medium", "2024-07-09", "Sports Department", true),
        item(3, "School Closure Notice", "The school will be closed on Friday, July 12th, due to a public holiday.", "general", "high", "2024-07-08", "Principal's Office", true),
        item(4, "New Library Books Available", "Our library has received a new collection of books covering various subjects.", "academic", "low", "2024-07-07", "Library Department", true),
        item(5, "Health and Safety Guidelines", "Please review the updated health guidelines. All students must follow these protocols.", "health", "high", "2024-07-06", "Health Department", false),
        item(6, "Science Fair Registration", "Registration is now open for our annual Science Fair!", "events", "medium", "2024-07-05", "Science Department", true),
    ]
}

pub fn assignments() -> Vec<Assignment> {
    let item = |id, title: &str, subject: &str, due: &str, status: &str, priority: &str, description: &str, kind: &str, marks, teacher: &str| {
        Assignment {
            id,
            title: title.to_string(),
            subject: subject.to_string(),
            due_date: due.to_string(),
            status: status.to_string(),
            priority: priority.to_string(),
            description: description.to_string(),
            submission_type: kind.to_string(),
            marks,
            teacher: teacher.to_string(),
        }
    };

    vec![
        item(1, "Mathematics - Algebra Problems", "Mathematics", "2024-07-15", "pending", "high", "Complete exercises 1-20 from Chapter 5", "Written", 25, "Mrs. Abena Mensah"),
        item(2, "English - Essay Writing", "English", "2024-07-18", "submitted", "medium", "Write a 500-word essay on 'My Future Career'", "Digital", 30, "Mr. John Asante"),
        item(3, "Science - Lab Report", "Science", "2024-07-20", "overdue", "high", "Submit lab report on plant growth experiment", "Digital", 20, "Dr. Sarah Osei"),
        item(4, "Social Studies - Research Project", "Social Studies", "2024-07-25", "pending", "low", "Research and present on Ghana's independence", "Presentation", 35, "Mr. Kwame Nkrumah"),
    ]
}

pub fn notifications() -> Vec<Notification> {
    let item = |id, title: &str, message: &str, kind: &str, priority: &str, date: &str, read, action, related: &str, sender: &str| {
        Notification {
            id,
            title: title.to_string(),
            message: message.to_string(),
            kind: kind.to_string(),
            priority: priority.to_string(),
            date: date.to_string(),
            is_read: read,
            action_required: action,
            related_to: related.to_string(),
            sender: sender.to_string(),
        }
    };

    vec![
        item(1, "Assignment Due Tomorrow", "Mathematics homework on Algebra is due tomorrow at 9:00 AM.", "assignment", "high", "2024-07-02", false, true, "Mathematics", "Mrs. Abena Mensah"),
        item(2, "New Announcement Posted", "Parent-Teacher Conference has been scheduled for next week.", "announcement", "medium", "2024-07-02", false, false, "School Administration", "Principal's Office"),
        item(3, "Fee Payment Reminder", "Your school fees for Term 2 are due in 3 days.", "payment", "high", "2024-07-02", true, true, "Finance Department", "Accounts Office"),
        item(4, "New Message from Teacher", "Great job on your science project! I've left some feedback in the chat.", "message", "low", "2024-07-02", true, false, "Science", "Dr. Sarah Osei"),
        item(5, "Exam Results Published", "Your Term 2 examination results are now available.", "results", "medium", "2024-07-01", true, false, "Academic Office", "Examination Board"),
        item(6, "Sports Day Registration", "Registration for annual Sports Day is now open.", "event", "low", "2024-06-30", true, true, "Sports Department", "Coach Michael"),
    ]
}

pub fn chats() -> Vec<ChatThread> {
    let item = |id, name: &str, role: &str, last: &str, time: &str, unread, online, kind: &str| ChatThread {
        id,
        name: name.to_string(),
        role: role.to_string(),
        last_message: last.to_string(),
        time: time.to_string(),
        unread_count: unread,
        online,
        kind: kind.to_string(),
    };

    vec![
        item(1, "Mrs. Abena Mensah", "Mathematics Teacher", "Great job on the algebra assignment!", "2 min ago", 2, true, "teacher"),
        item(2, "Class 5 Group", "Class Discussion", "Don't forget about tomorrow's science project presentation!", "15 min ago", 5, false, "group"),
        item(3, "Dr. Sarah Osei", "Science Teacher", "The lab results look fantastic!", "1 hour ago", 0, true, "teacher"),
        item(4, "School Administration", "Official Updates", "Reminder: Parent-teacher conference scheduled for next week.", "3 hours ago", 1, false, "admin"),
        item(5, "Mr. John Asante", "English Teacher", "Your essay shows great improvement in writing skills!", "5 hours ago", 0, false, "teacher"),
        item(6, "Parents Group", "Parent Community", "Anyone interested in organizing a school trip?", "1 day ago", 3, true, "group"),
    ]
}

pub fn fee_structure() -> FeeStructure {
    FeeStructure {
        items: [
            ("tuition", 2500),
            ("books", 300),
            ("uniform", 200),
            ("transport", 150),
            ("meals", 400),
            ("activities", 100),
            ("technology", 75),
            ("insurance", 50),
        ]
        .into_iter()
        .map(|(name, amount)| (name.to_string(), amount))
        .collect(),
    }
}

pub fn fee_payments() -> Vec<FeePayment> {
    let item = |id, date: &str, amount, kind: &str, method: &str, reference: &str, description: &str| FeePayment {
        id,
        date: date.to_string(),
        amount,
        kind: kind.to_string(),
        method: method.to_string(),
        reference: reference.to_string(),
        status: "completed".to_string(),
        description: description.to_string(),
    };

    vec![
        item(1, "2024-01-15", 1500, "Partial Payment", "Bank Transfer", "TXN001234567", "First Term - Partial Payment"),
        item(2, "2024-02-20", 1275, "Balance Payment", "Mobile Money", "MM987654321", "First Term - Balance Payment"),
        item(3, "2024-04-10", 2000, "Partial Payment", "Cash", "CASH001", "Second Term - Partial Payment"),
    ]
}

pub fn term_results() -> Vec<TermResults> {
    let subject = |name: &str, teacher: &str, class_score, exam_score, total_score, grade: &str, position, comment: &str| SubjectResult {
        name: name.to_string(),
        teacher: teacher.to_string(),
        class_score,
        exam_score,
        total_score,
        grade: grade.to_string(),
        position,
        comment: comment.to_string(),
    };

    vec![
        TermResults {
            key: "current".to_string(),
            period: "Term 2, 2024".to_string(),
            position: 3,
            total_students: 45,
            overall_grade: "A-".to_string(),
            subjects: vec![
                subject("Mathematics", "Mrs. Abena Mensah", 92, 88, 90, "A+", 2, "Excellent performance in algebra and geometry."),
                subject("English Language", "Mr. John Asante", 85, 82, 84, "A", 5, "Good improvement in essay writing."),
                subject("Science", "Dr. Sarah Osei", 88, 90, 89, "A+", 1, "Outstanding performance in all science topics."),
                subject("Social Studies", "Mr. Kwame Nkrumah", 80, 85, 83, "A", 4, "Good understanding of historical concepts."),
                subject("French", "Mme. Akosua Boateng", 78, 80, 79, "B+", 8, "Good progress in speaking."),
                subject("Physical Education", "Coach Michael", 95, 92, 94, "A+", 1, "Excellent athletic performance and team spirit!"),
            ],
        },
        TermResults {
            key: "previous".to_string(),
            period: "Term 1, 2024".to_string(),
            position: 5,
            total_students: 45,
            overall_grade: "B+".to_string(),
            subjects: vec![
                subject("Mathematics", "Mrs. Abena Mensah", 85, 80, 82, "A", 4, "Solid work. Practice word problems."),
                subject("English Language", "Mr. John Asante", 78, 80, 79, "B+", 9, "Read more widely."),
                subject("Science", "Dr. Sarah Osei", 84, 86, 85, "A", 3, "Very good lab work."),
            ],
        },
    ]
}
