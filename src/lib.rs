// 单链表的应用场景很偏门：
// 只需要在尾部追加、按下标读取和删除，数量频繁变动
// 元素很大，否则一个节点光是链接（一个usize的大小）都比本体大了

// 越界访问不报错：get返回None，delete什么都不做
// 需要知道为什么失败的，用try_get和try_delete

pub mod error;
pub mod linked_list;

pub use error::IndexError;
pub use linked_list::LinkedList;
