/// Presentation settings the comparator reads while it runs.
pub trait ConfigProvider {
    fn first_prompt(&self) -> &str;
    fn second_prompt(&self) -> &str;
    fn pause_prompt(&self) -> &str;
    fn pause_enabled(&self) -> bool;
}
