pub struct Icons;

impl Icons {
    pub const STUDENTS: &str = "🎓";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const EMPTY: &str = "∅";
}
