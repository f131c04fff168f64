//! Order management
//!
//! Orders are never created or deleted from the dashboard; staff move them
//! through their statuses and correct the delivery address.

use admin_client::display::{format_date, format_vnd};
use admin_client::models::{Order, OrderStatus};
use leptos::prelude::*;

use crate::components::table::{pager, status_row, toolbar};
use crate::components::Modal;
use crate::screen::{use_resource, ResourceHandle};

fn status_badge(status: &str) -> String {
    format!("badge badge-{}", OrderStatus::badge(status))
}

#[component]
pub fn OrderPage() -> impl IntoView {
    let handle = use_resource::<Order>();

    let rows = move || {
        let state = handle.state.get();
        if state.items.is_empty() {
            return status_row(handle, 7).into_any();
        }
        state
            .items
            .iter()
            .enumerate()
            .map(|(index, order)| {
                let row = order.clone();
                view! {
                    <tr>
                        <td>{state.row_number(index)}</td>
                        <td>{format!("#{}", order.order_id)}</td>
                        <td>{order.user.name.clone()}</td>
                        <td>{format_date(&order.order_date)}</td>
                        <td class="col-number">{format_vnd(order.total_amount)}</td>
                        <td><span class=status_badge(&order.status)>{order.status.clone()}</span></td>
                        <td>
                            <button class="btn btn-link" on:click=move |_| handle.open_edit(&row)>
                                "Chi tiết"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="resource-page">
            {toolbar(handle, "Tìm đơn hàng...")}
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"STT"</th>
                        <th>"Mã đơn"</th>
                        <th>"Khách hàng"</th>
                        <th>"Ngày đặt"</th>
                        <th>"Tổng tiền"</th>
                        <th>"Trạng thái"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            {pager(handle)}
            <Modal open=handle.modal_open() title=handle.modal_title("đơn hàng") on_close=move |_| handle.close_modal()>
                <OrderForm handle=handle />
            </Modal>
        </section>
    }
}

#[component]
fn OrderForm(handle: ResourceHandle<Order>) -> impl IntoView {
    let order = move || handle.draft_field(|order| order.clone());

    view! {
        <form
            class="modal-form"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                handle.submit();
            }
        >
            <div class="order-customer">
                <p><strong>"Khách hàng: "</strong>{move || order().user.name}</p>
                <p><strong>"Điện thoại: "</strong>{move || order().user.phone}</p>
                <p><strong>"Ngày đặt: "</strong>{move || format_date(&order().order_date)}</p>
                <p><strong>"Thanh toán: "</strong>{move || order().payment_method}</p>
            </div>
            <table class="order-items">
                <thead>
                    <tr>
                        <th>"Sách"</th>
                        <th>"Số lượng"</th>
                        <th>"Đơn giá"</th>
                        <th>"Thành tiền"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        order()
                            .order_items
                            .into_iter()
                            .map(|item| {
                                let line_total = item.price * item.quantity as f64;
                                view! {
                                    <tr>
                                        <td>{item.book.name}</td>
                                        <td>{item.quantity}</td>
                                        <td class="col-number">{format_vnd(item.price)}</td>
                                        <td class="col-number">{format_vnd(line_total)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="3">"Tổng cộng"</td>
                        <td class="col-number">{move || format_vnd(order().total_amount)}</td>
                    </tr>
                </tfoot>
            </table>
            <label class="field">
                <span>"Trạng thái"</span>
                <select on:change=move |ev| {
                    let status = event_target_value(&ev);
                    handle.edit(move |order| order.status = status);
                }>
                    {OrderStatus::ALL
                        .into_iter()
                        .map(|status| {
                            let label = status.label();
                            view! {
                                <option value=label selected=move || handle.draft_field(|o| o.status == label)>
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <label class="field">
                <span>"Địa chỉ giao hàng"</span>
                <input
                    type="text"
                    prop:value=move || handle.draft_field(|o| o.shipping_address.clone())
                    on:input=move |ev| {
                        let address = event_target_value(&ev);
                        handle.edit(move |o| o.shipping_address = address);
                    }
                />
            </label>
            <div class="modal-actions">
                <button type="button" class="btn btn-outline" on:click=move |_| handle.close_modal()>
                    "Đóng"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || handle.is_submitting()>
                    "Cập nhật"
                </button>
            </div>
        </form>
    }
}
