use crate::domain::FRANCHISES;

pub struct TeamsController;

impl TeamsController {
    pub fn list(&self) -> String {
        let mut out = String::from("IPL Franchises\n==============\n");
        for franchise in FRANCHISES.iter() {
            out.push_str(&format!("  {:<5} {}\n", franchise.code, franchise.name));
        }
        out
    }
}
