use clap::Args;

/// Program year, semester and branch, matched exactly against the catalog
#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Program year (E1, E2, E3, E4)
    pub year: String,

    /// Semester ("Sem - 1" or "Sem - 2")
    pub semester: String,

    /// Branch (CSE, ECE, EEE, CIVIL, MECH)
    pub branch: String,
}

#[derive(Args, Debug, Clone)]
pub struct SubjectsArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Include hidden rows
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug, Clone)]
pub struct GpaArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Grades in slot order; missing or non-numeric grades count as 0
    #[arg(allow_negative_numbers = true)]
    pub grades: Vec<String>,

    /// Fill only the rows the form shows, skipping hidden slots
    #[arg(long)]
    pub visible_only: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Only list this program year
    #[arg(long)]
    pub year: Option<String>,

    /// Only list this semester
    #[arg(long)]
    pub semester: Option<String>,

    /// Only list this branch
    #[arg(long)]
    pub branch: Option<String>,
}
