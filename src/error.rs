// 严格版本的访问（try_get、try_delete）才会产生错误
// 宽松版本（get、delete）越界时返回None或什么都不做
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    /// 下标转不成usize，比如负数
    #[error("index is not a valid list position")]
    Unrepresentable,
    #[error("index {index} out of bounds for list of size {size}")]
    OutOfBounds { index: usize, size: usize },
}
