/// One line per supported unit: its symbol and its size in meter.
pub fn lines() -> impl Iterator<Item = String> {
    length::supported_units()
        .iter()
        .map(|unit| format!("{}\t{:e}", unit, unit.factor()))
}

pub fn execute() {
    for line in lines() {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::lines;

    #[test]
    fn lists_every_unit_in_order() {
        let lines: Vec<_> = lines().collect();
        assert_eq!(lines.len(), 18);
        assert_eq!(lines[0], "pm\t1e-12");
        assert_eq!(lines[6], "m\t1e0");
        assert_eq!(lines[10], "nmi\t1.852e3");
        assert!(lines[17].starts_with("pc\t"));
    }
}
