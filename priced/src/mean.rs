pub trait Mean {
    /// Integer mean, truncating toward zero. Empty input yields 0.
    fn mean(self) -> i32;
}

impl<F, T> Mean for T
where
    T: Iterator<Item = F>,
    F: std::borrow::Borrow<i32>,
{
    fn mean(self) -> i32 {
        let (sum, count) = self.fold((0i64, 0i64), |(sum, count), e| {
            (sum + i64::from(*e.borrow()), count + 1)
        });
        if count == 0 {
            0
        } else {
            (sum / count) as i32
        }
    }
}
