//! Built-in curriculum table
//!
//! One row per (program year, semester, branch). Names and credits are kept
//! as published, including rows where the two lists differ in length.

use super::entry::RawEntry;
use super::keys::{Branch, ProgramYear, Semester};

pub(crate) type CatalogRow = (ProgramYear, Semester, Branch, RawEntry);

pub(crate) static CURRICULUM: &[CatalogRow] = &[
    // E1 / Sem - 1
    (
        ProgramYear::E1,
        Semester::First,
        Branch::Cse,
        RawEntry {
            names: &[
                "Calculus & Linear Algebra",
                "Basic Electrical and Electronics Engg.",
                "Problem Solving and Programming Through C",
                "Engineering Graphics & Computer Drafting",
                "English-Language communication Skills Lab-I",
                "Basic Electrical and Electronics Engg. Lab",
                "Problem Solving and Programming Through C Lab",
                "",
                "",
            ],
            credits: &[4.0, 4.0, 4.0, 2.5, 2.5, 1.5, 1.5, 0.0, 0.0, 0.0],
            hide: &[8, 9],
            show: &[],
        },
    ),
    (
        ProgramYear::E1,
        Semester::First,
        Branch::Ece,
        RawEntry {
            names: &[
                "Differential Equations and Multivariable calculus",
                "Engineering Physics",
                "Engineering Physics Lab",
                "Engineering Graphics and Computer Drafting",
                "Electrical Technology",
                "Electrical Technology Lab",
                "Introduction to Latest Technical Advancements",
                "Programming & Data Structures",
                "Programming & Data Structures Lab",
            ],
            credits: &[4.0, 4.0, 1.5, 2.5, 4.0, 1.5, 1.0, 3.0, 1.5, 0.0],
            hide: &[],
            show: &[],
        },
    ),
    (
        ProgramYear::E1,
        Semester::First,
        Branch::Eee,
        RawEntry {
            names: &[
                "Differential Equations and Multivariable calculus",
                "Engineering Physics",
                "Engineering Physics Lab",
                "Engineering Graphics & Computer Drafting",
                "Electrical Technology",
                "Electrical Technology Lab",
                "Introduction to Latest Technical Advancements",
                "Programming & Data Structures",
                "Programming & Data Structures Lab",
            ],
            credits: &[4.0, 4.0, 1.5, 2.5, 4.0, 1.5, 1.0, 3.0, 1.5, 0.0],
            hide: &[],
            show: &[],
        },
    ),
    (
        ProgramYear::E1,
        Semester::First,
        Branch::Civil,
        RawEntry {
            names: &[
                "Engineering Chemistry",
                "Differential Equations and Multivariable Calculus",
                "Basic Programming Language",
                "Engineering Graphics and Computer Drafting",
                "Computer Aided Drafting (CAD) Lab",
                "English Language Communication Skills Lab-I",
                "C Programming Lab",
                "Human Values",
                "",
                "",
            ],
            credits: &[3.0, 4.0, 4.0, 2.5, 1.5, 2.5, 1.5, 0.0, 0.0, 0.0],
            hide: &[8, 9],
            show: &[],
        },
    ),
    (
        ProgramYear::E1,
        Semester::First,
        Branch::Mech,
        RawEntry {
            names: &[
                "Differential Equations and Multivariable Calculus",
                "English Language Communication Skills Lab - 1",
                "Engineering Physics",
                "Basic Electrical and Electronics Engineering",
                "Engineering Chemistry",
                "Workshop Practice",
                "Basic Electrical & Electronics Engineering Lab",
                "Engineering Physics & Chemistry Lab",
                "",
            ],
            credits: &[4.0, 2.5, 4.0, 4.0, 3.0, 1.5, 1.5, 1.5, 0.0, 0.0],
            hide: &[9],
            show: &[],
        },
    ),
    // E1 / Sem - 2
    (
        ProgramYear::E1,
        Semester::Second,
        Branch::Cse,
        RawEntry {
            names: &[
                "Discrete Mathematics",
                "Engineering Physics",
                "Managerial Economics and Finance Analysis",
                "Object Oriented Programming through Java",
                "Data Structures",
                "Engineering Physics Lab",
                "Object Oriented Programming through Java Lab",
                "Data Structures Lab",
                "",
            ],
            credits: &[4.0, 4.0, 3.0, 4.0, 3.0, 1.5, 1.5, 1.5, 0.0, 0.0],
            hide: &[9],
            show: &[],
        },
    ),
    (
        ProgramYear::E1,
        Semester::Second,
        Branch::Ece,
        RawEntry {
            names: &[
                "Mathematical Methods",
                "Object Oriented Programming",
                "Object Oriented Programming Laboratory",
                "Computational Lab",
                "English-Language Communication skills Lab-1",
                "Electronic Devices and Circuits",
                "Electronic Devices and Circuits Lab",
                "Network Theory",
                "Signals & Systems",
            ],
            credits: &[4.0, 2.0, 1.5, 1.5, 2.5, 4.0, 1.5, 4.0, 2.4, 0.0],
            hide: &[],
            show: &[],
        },
    ),
    (
        ProgramYear::E1,
        Semester::Second,
        Branch::Eee,
        RawEntry {
            names: &[
                "Linear Algebra & Numerical Methods",
                "Digital Logic Design",
                "Digital Logic Design Lab",
                "Computational Lab",
                "English Language communication skills lab 1",
                "Electronic Devices and Circuits",
                "Electronic Devices and Circuits Lab",
                "Network Theory",
                "Introduction to AI",
            ],
            credits: &[4.0, 4.0, 1.5, 1.5, 2.5, 4.0, 1.5, 4.0, 1.0, 0.0],
            hide: &[],
            show: &[],
        },
    ),
    (
        ProgramYear::E1,
        Semester::Second,
        Branch::Civil,
        RawEntry {
            names: &[
                "Advanced Programming Course",
                "Linear Algebra and Numerical Methods",
                "Basic Electrical and Electronics Engineering",
                "Engineering Mechanics",
                "Engineering Geology",
                "Advanced Programming Lab",
                "Workshop",
                "Environmental Science",
                "",
                "",
            ],
            credits: &[3.0, 4.0, 3.0, 4.0, 3.0, 1.5, 1.5, 0.0, 0.0, 0.0],
            hide: &[8, 9],
            show: &[],
        },
    ),
    (
        ProgramYear::E1,
        Semester::Second,
        Branch::Mech,
        RawEntry {
            names: &[
                "Mathematical Methods",
                "Engineering Mechanics",
                "Material Science & Metallurgy",
                "Programming and Data Structures",
                "Engineering Graphics and Computer Drafting",
                "Programming and Data Structures Lab",
                "Material Science and Metallurgy Lab",
                "",
                "",
            ],
            credits: &[4.0, 4.0, 3.0, 3.0, 2.5, 1.5, 1.5, 0.0, 0.0, 0.0],
            hide: &[8, 9],
            show: &[],
        },
    ),
    // E2 / Sem - 1
    (
        ProgramYear::E2,
        Semester::First,
        Branch::Cse,
        RawEntry {
            names: &[
                "Probability and Statistics",
                "Digital Logic Design",
                "Design & Analysis of Algorithms",
                "Database Management Systems",
                "Formal Languages & Automata Theory",
                "Design & Analysis of Algorithms Lab",
                "Digital Logic Design Lab",
                "Database Management Systems Lab",
                "",
            ],
            credits: &[4.0, 3.0, 4.0, 3.0, 3.0, 1.5, 1.5, 1.5, 0.0, 0.0],
            hide: &[9],
            show: &[],
        },
    ),
    (
        ProgramYear::E2,
        Semester::First,
        Branch::Ece,
        RawEntry {
            names: &[
                "Probability & Random Variables",
                "Internet of Things Lab",
                "Analog Electronic Circuits",
                "Analog Electronic Circuits Lab",
                "Digital Logic Design",
                "Digital Logic Design Lab",
                "Digital Signal Processing",
                "Digital Signal Processing Lab",
                "Control Systems",
            ],
            credits: &[3.0, 1.5, 4.0, 1.5, 4.0, 1.5, 4.0, 1.5, 3.0, 0.0],
            hide: &[],
            show: &[],
        },
    ),
    (
        ProgramYear::E2,
        Semester::First,
        Branch::Eee,
        RawEntry {
            names: &[
                "Probability & Random Variables",
                "Internet of Things Lab",
                "Analog Electronic Circuits",
                "Analog Electronic Circuits Lab",
                "Object Oriented Programming",
                "Object Oriented Programming Lab",
                "Signals & Systems",
                "Electrical Machines",
                "Electrical Machines Lab",
            ],
            credits: &[3.0, 1.0, 4.0, 1.5, 3.0, 1.0, 4.0, 4.0, 1.5, 0.0],
            hide: &[],
            show: &[],
        },
    ),
    (
        ProgramYear::E2,
        Semester::First,
        Branch::Civil,
        RawEntry {
            names: &[
                "Management Economics and Financial Analysis",
                "Building Materials and Construction",
                "Concrete Technology",
                "Mechanics of Fluids",
                "Mechanics of Materials",
                "Surveying",
                "Mechanics of Materials Lab",
                "Surveying Lab",
                "Indian Constitution",
                "",
            ],
            credits: &[3.0, 3.0, 3.0, 3.0, 4.0, 4.0, 1.5, 1.5, 0.0, 0.0],
            hide: &[9],
            show: &[],
        },
    ),
    (
        ProgramYear::E2,
        Semester::First,
        Branch::Mech,
        RawEntry {
            names: &[
                "Transform Calculus",
                "Kinematics of Machinery",
                "Thermodynamics",
                "Mechanics of Solids",
                "Manufacturing Processes",
                "Mechanics of Solids Lab",
                "Computer Aided Machine Drawing",
                "",
                "",
            ],
            credits: &[4.0, 4.0, 4.0, 4.0, 3.0, 1.5, 1.5, 0.0, 0.0, 0.0],
            hide: &[8, 9],
            show: &[],
        },
    ),
    // E2 / Sem - 2
    (
        ProgramYear::E2,
        Semester::Second,
        Branch::Cse,
        RawEntry {
            names: &[
                "Introduction to Operation Research",
                "Computer Organization & Architecture",
                "Data Science with Python",
                "Web Technologies",
                "Compiler Design",
                "Computer Organization & Architecture Lab",
                "Data Science with Python Lab",
                "Web Technologies Lab",
                "",
            ],
            credits: &[3.0, 3.0, 3.0, 3.0, 3.0, 1.5, 1.5, 1.5, 0.0, 0.0],
            hide: &[9],
            show: &[],
        },
    ),
    (
        ProgramYear::E2,
        Semester::Second,
        Branch::Ece,
        RawEntry {
            names: &[
                "Robotics Laboratory",
                "Communication Systems-1",
                "Communication Systems-1 Lab",
                "Digital System Design",
                "Digital System Design Lab",
                "Linear Integrated Circuits",
                "Linear Integrated Circuits Lab",
                "Electromagnetic Waves & Guided Media",
                "",
            ],
            credits: &[2.5, 4.0, 1.5, 4.0, 1.5, 4.0, 1.5, 4.0, 0.0, 0.0],
            hide: &[9],
            show: &[],
        },
    ),
    (
        ProgramYear::E2,
        Semester::Second,
        Branch::Eee,
        RawEntry {
            names: &[
                "Robotics Laboratory",
                "Power Systems-I",
                "Machine Learning",
                "Control Systems",
                "Control Systems Lab",
                "Linear Integrated Circuits",
                "Linear Integrated Circuits Lab",
                "Power Electronics",
                "Power Electronics Lab",
            ],
            credits: &[1.0, 4.0, 3.0, 4.0, 1.5, 4.0, 1.5, 4.0, 1.5, 0.0],
            hide: &[],
            show: &[],
        },
    ),
    (
        ProgramYear::E2,
        Semester::Second,
        Branch::Civil,
        RawEntry {
            names: &[
                "Hydraulics Engineering",
                "Environmental Engineering-I",
                "Geo-Technical Engineering-I",
                "Structural Analysis",
                "Water Resources Engineering",
                "Introduction to Probability and Statistics",
                "Hydraulics Engineering Lab",
                "Geotechnical Engineering Lab",
                "",
                "",
            ],
            credits: &[3.0, 3.0, 4.0, 4.0, 3.0, 3.0, 1.5, 1.5, 0.0, 0.0],
            hide: &[8, 9],
            show: &[],
        },
    ),
    (
        ProgramYear::E2,
        Semester::Second,
        Branch::Mech,
        RawEntry {
            names: &[
                "Design of Machine Elements",
                "Dynamics of Machinery",
                "Fluid Mechanics & Hydraulic Machinery",
                "Metal Cutting and Machine Tools",
                "Probability and Statistics",
                "Metal cutting and Machine Tools Lab",
                "Fluid Mechanics & Hydraulic Machinery Lab",
                "",
                "",
            ],
            credits: &[4.0, 4.0, 4.0, 4.0, 3.0, 1.5, 1.5, 0.0, 0.0, 0.0],
            hide: &[8, 9],
            show: &[],
        },
    ),
    // E3 / Sem - 1
    (
        ProgramYear::E3,
        Semester::First,
        Branch::Cse,
        RawEntry {
            names: &[
                "Operating System",
                "Computer Networks",
                "Software Engineering",
                "Mathematical Foundations for Data Science",
                "Elective I",
                "Operating System Lab",
                "Computer Networks Lab",
                "Software Engineering Lab",
                "English-Language communication Skills Lab- II",
            ],
            credits: &[3.0, 3.0, 3.0, 3.0, 3.0, 1.5, 1.5, 1.5, 1.5, 0.0],
            hide: &[],
            show: &[],
        },
    ),
    (
        ProgramYear::E3,
        Semester::First,
        Branch::Ece,
        RawEntry {
            names: &[
                "Computer Networks",
                "Computer Organization & Architecture",
                "English-Language Communication skills Lab-2",
                "Communication Systems- 2",
                "Communication Systems -2 Lab",
                "Microprocessors,Microcontrollers & Computer Networks Lab",
                "Radio Frequency & Microwave Engg. Lab",
                "Mini-Project-I (Socially Relevant Project)",
                "",
            ],
            credits: &[3.0, 4.0, 1.5, 4.0, 1.5, 1.5, 2.5, 1.0, 0.0, 0.0],
            hide: &[9],
            show: &[],
        },
    ),
    (
        ProgramYear::E3,
        Semester::First,
        Branch::Eee,
        RawEntry {
            names: &[
                "Digital Signal Processing",
                "Power Systems-II",
                "Power Systems Lab",
                "English Language Communication Skills Lab-2",
                "Electrical Vehicles",
                "Electrical Vehicles Lab",
                "Embedded Systems",
                "Embedded Systems Lab",
                "Mini-Project-I (Socially Relevant Project)",
                "Product Design & Innovation Lab",
            ],
            credits: &[3.0, 4.0, 1.5, 1.5, 3.0, 1.5, 3.0, 1.5, 1.0, 1.0],
            hide: &[],
            show: &[10],
        },
    ),
    (
        ProgramYear::E3,
        Semester::First,
        Branch::Civil,
        RawEntry {
            names: &[
                "Advanced Structural Analysis",
                "Design of Reinforced Concrete Structures",
                "Environmental Engineering-II",
                "Geo-Technical Engineering-II",
                "English Language Communication Skills Lab-II",
                "Environmental Engineering Lab",
                "Concrete Technology Lab",
                "Computer Applications in Civil Engineering Lab",
                "Aptitude & Reasoning",
                "",
            ],
            credits: &[4.0, 4.0, 3.0, 3.0, 1.5, 1.5, 1.5, 1.5, 0.0, 0.0],
            hide: &[9],
            show: &[],
        },
    ),
    (
        ProgramYear::E3,
        Semester::First,
        Branch::Mech,
        RawEntry {
            names: &[
                "Heat Transfer",
                "Design of Transmission Elements",
                "Applied Thermodynamics",
                "Metrology and Mechanical Measurements",
                "Metrology and Mechanical Measurements Lab",
                "Heat Transfer Lab",
                "Applied Thermodynamics Lab",
                "English Language Communication Skills Lab-II",
                "",
            ],
            credits: &[4.0, 4.0, 4.0, 3.0, 1.5, 1.5, 1.5, 1.5, 0.0, 0.0],
            hide: &[9],
            show: &[],
        },
    ),
    // E3 / Sem - 2
    (
        ProgramYear::E3,
        Semester::Second,
        Branch::Cse,
        RawEntry {
            names: &[
                "Cryptography and Networks Security",
                "Artificial Intelligence",
                "Elective II",
                "Elective III",
                "Open Elective-I",
                "English-Language communication Skills Lab-I -III",
                "Mini Project",
                "",
                "Summer Internship",
            ],
            credits: &[4.0, 4.0, 3.0, 3.0, 3.0, 1.5, 3.0, 0.0, 3.0, 0.0],
            hide: &[8],
            show: &[],
        },
    ),
    (
        ProgramYear::E3,
        Semester::Second,
        Branch::Ece,
        RawEntry {
            names: &[
                "English-Language Communication skills Lab-3",
                "Product Design & Innovation",
                "Elective-1",
                "Elective-2",
                "Open Elective-1",
                "Open Elective-2",
                "Mini Project-II",
                "",
                "",
            ],
            credits: &[1.5, 1.0, 3.0, 3.0, 3.0, 3.0, 1.5, 0.0, 0.0, 0.0],
            hide: &[8, 9],
            show: &[],
        },
    ),
    (
        ProgramYear::E3,
        Semester::Second,
        Branch::Eee,
        RawEntry {
            names: &[
                "English Language Communication skills lab-3",
                "Elective-1",
                "Elective-2",
                "Open Elective-1",
                "Open Elective-2",
                "Mini Project-II",
                "",
                "",
                "",
            ],
            credits: &[1.5, 3.0, 3.0, 3.0, 3.0, 1.0, 0.0, 0.0, 0.0, 0.0],
            hide: &[7, 8, 9],
            show: &[],
        },
    ),
    (
        ProgramYear::E3,
        Semester::Second,
        Branch::Civil,
        RawEntry {
            names: &[
                "Building Planning and Drawing",
                "Design of Steel Structures",
                "Transportation Engineering-I",
                "Estimation and Costing",
                "Professional Elective Course-I",
                "English Language Communication Skills Lab-III",
                "Transportation Engineering Lab",
                "Personality and Professional Development Skills",
                "Summer Internship",
                "",
            ],
            credits: &[2.5, 4.0, 3.0, 3.0, 3.0, 1.5, 1.5, 1.5, 3.0, 0.0],
            hide: &[9],
            show: &[],
        },
    ),
    (
        ProgramYear::E3,
        Semester::Second,
        Branch::Mech,
        RawEntry {
            names: &[
                "Operations Research",
                "Finite Element Method",
                "Managerial Economics and Financial Analysis",
                "Program Elective Course-1",
                "Program Elective Course-2",
                "Computer Aided Modeling and Simulation Lab",
                "English Language Communication Skills Lab-III",
                "",
                "",
            ],
            credits: &[4.0, 4.0, 3.0, 3.0, 3.0, 1.5, 1.5, 0.0, 0.0, 0.0],
            hide: &[8, 9],
            show: &[],
        },
    ),
    // E4 / Sem - 1
    (
        ProgramYear::E4,
        Semester::First,
        Branch::Cse,
        RawEntry {
            names: &[
                "Elective-V",
                "Open Elective-III",
                "Open Elective-IV",
                "Project-II",
                "Community Service",
                "",
                "",
                "",
                "",
            ],
            credits: &[3.0, 3.0, 3.0, 6.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            hide: &[6, 7, 8, 9],
            show: &[],
        },
    ),
    (
        ProgramYear::E4,
        Semester::First,
        Branch::Ece,
        RawEntry {
            names: &[
                "Elective-3",
                "Elective-4",
                "Open Elective-3",
                "Summer Internship Project",
                "Project I",
                "",
                "",
                "",
                "",
            ],
            credits: &[3.0, 3.0, 3.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            hide: &[6, 7, 8, 9],
            show: &[],
        },
    ),
    (
        ProgramYear::E4,
        Semester::First,
        Branch::Eee,
        RawEntry {
            names: &[
                "Elective-3",
                "Elective-4",
                "Open Elective-3",
                "Summer Internship Project",
                "Project-I",
                "",
                "",
                "",
                "",
            ],
            credits: &[3.0, 3.0, 3.0, 3.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            hide: &[6, 7, 8, 9],
            show: &[],
        },
    ),
    (
        ProgramYear::E4,
        Semester::First,
        Branch::Civil,
        RawEntry {
            names: &[
                "Professional Elective Course-2/MOOC-1",
                "Professional Elective Course-3",
                "Professional Elective Course-4",
                "Open Elective Course-1",
                "Project-1",
                "Seminar",
                "",
                "",
                "",
                "",
            ],
            credits: &[3.0, 3.0, 3.0, 3.0, 4.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            hide: &[6, 7, 8, 9],
            show: &[],
        },
    ),
    (
        ProgramYear::E4,
        Semester::First,
        Branch::Mech,
        RawEntry {
            names: &[
                "Program Elective Course-3",
                "Open Elective Course-1",
                "Open Elective Course-2",
                "Project",
                "",
                "",
                "",
                "",
                "",
            ],
            credits: &[3.0, 3.0, 3.0, 4.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            hide: &[5, 6, 7, 8, 9],
            show: &[],
        },
    ),
    // E4 / Sem - 2
    (
        ProgramYear::E4,
        Semester::Second,
        Branch::Cse,
        RawEntry {
            names: &[
                "Discrete Mathematics",
                "Engineering Physics",
                "Managerial Economics and Finance Analysis",
                "Object Oriented Programming through Java",
                "Data Structures",
                "Engineering Physics Lab",
                "Object Oriented Programming through Java Lab",
                "Data Structures Lab",
                "",
            ],
            credits: &[4.0, 4.0, 3.0, 4.0, 3.0, 1.5, 1.5, 1.5, 0.0, 0.0],
            hide: &[6, 7, 8, 9],
            show: &[],
        },
    ),
    (
        ProgramYear::E4,
        Semester::Second,
        Branch::Ece,
        RawEntry {
            names: &[
                "Community Service",
                "Elective-5",
                "Open Elective-4",
                "Project-II & Dissertation",
                "",
                "",
                "",
                "",
                "",
            ],
            credits: &[2.0, 3.0, 3.0, 6.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            hide: &[5, 6, 7, 8, 9],
            show: &[],
        },
    ),
    (
        ProgramYear::E4,
        Semester::Second,
        Branch::Eee,
        RawEntry {
            names: &[
                "Community Service",
                "Elective-5",
                "Open Elective-4",
                "Project-II & Dissertation",
                "",
                "",
                "",
                "",
                "",
            ],
            credits: &[2.0, 3.0, 3.0, 6.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            hide: &[5, 6, 7, 8, 9],
            show: &[],
        },
    ),
    (
        ProgramYear::E4,
        Semester::Second,
        Branch::Civil,
        RawEntry {
            names: &[
                "Professional Elective Course-5",
                "Open Elective Course-3/MOOC-2",
                "Open Elective Course-4",
                "Project-2",
                "Community Services",
                "",
                "",
                "",
                "",
                "",
            ],
            credits: &[3.0, 3.0, 3.0, 5.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            hide: &[5, 6, 7, 8, 9],
            show: &[],
        },
    ),
    (
        ProgramYear::E4,
        Semester::Second,
        Branch::Mech,
        RawEntry {
            names: &[
                "Program Elective Course-4",
                "Open Elective Course-3",
                "Open Elective Course-4",
                "Community Service",
                "Project",
                "",
                "",
                "",
                "",
            ],
            credits: &[3.0, 3.0, 3.0, 2.0, 6.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            hide: &[6, 7, 8, 9],
            show: &[],
        },
    ),
];
